pub mod button;
pub mod checkbox;
pub mod input;
pub mod radio;
pub mod textarea;

pub use button::Button;
pub use checkbox::Checkbox;
pub use input::TextField;
pub use radio::RadioGroup;
pub use textarea::Textarea;
