//! Landing page

use super::dialog::ExportDialog;
use std::fmt;

/// Where the landing page can send the operator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Home,
    Registration,
}

impl Route {
    /// Path relative to the application root
    pub fn path(&self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::Registration => "/register",
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

/// Entry screen with the "register a patient" and "export" actions
#[derive(Clone)]
pub struct HomePage {
    dialog: ExportDialog,
}

impl HomePage {
    pub fn new(dialog: ExportDialog) -> Self {
        Self { dialog }
    }

    /// Navigate to the registration flow
    pub fn register(&self) -> Route {
        tracing::debug!(route = %Route::Registration, "Navigating to registration");
        Route::Registration
    }

    /// Show the export dialog and hand it back
    pub fn open_export(&self) -> &ExportDialog {
        self.dialog.open();
        &self.dialog
    }

    pub fn export_dialog(&self) -> &ExportDialog {
        &self.dialog
    }
}
