mod presentation;

pub use presentation::{ PresentationError, Result };
