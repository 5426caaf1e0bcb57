mod dialogs;
mod intake;

pub use dialogs::{has_native_picker, pick_image_file};
pub use intake::{IncomingFile, IntakeError, IntakePipeline, ReadCompletion, ReadRequest, ReadToken};
