pub mod aside;
pub mod button;
pub mod card;
pub mod checkbox;
pub mod dialog;
pub mod effects;
pub mod fieldset;
pub mod image_frame;
pub mod link;
pub mod list;
pub mod paragraph;
pub mod progress;
pub mod radio;
pub mod section;
pub mod separator;
pub mod shaped;
pub mod steps;
pub mod text_field;
pub mod title;

pub use aside::Aside;
pub use button::{Button, ButtonVariant};
pub use card::Card;
pub use checkbox::Checkbox;
pub use dialog::{ConfirmationDialog, Dialog, ErrorDialog, InputDialog, LoadingDialog, SuccessDialog};
pub use effects::{Glitch, ScanLine};
pub use fieldset::Fieldset;
pub use image_frame::{FrameStyle, ImageFrame};
pub use link::Link;
pub use list::{List, ListKind};
pub use paragraph::Paragraph;
pub use progress::{LoadingSpinner, LoadingSpinnerWithText, ProgressBar};
pub use radio::{RadioButton, RadioGroup};
pub use section::{Section, SectionAnchor, SectionBorder};
pub use separator::Separator;
pub use shaped::{ShapeStrip, ShapedBox};
pub use steps::Steps;
pub use text_field::TextField;
pub use title::Title;
