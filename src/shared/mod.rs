//! Geteilte Laufzeit-Optionen zwischen App-, Render- und UI-Schicht.

pub mod options;

pub use options::ViewerOptions;
