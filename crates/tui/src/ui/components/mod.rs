pub mod common;
pub mod component;

mod features;
mod header;
mod hint_bar;
mod logs;
mod prompt;
mod result;
mod toast;

pub(crate) use component::Component;
pub use features::FeaturesComponent;
pub use header::HeaderComponent;
pub use hint_bar::HintBarComponent;
pub use logs::LogsComponent;
pub use prompt::PromptComponent;
pub use result::ResultComponent;
pub use toast::ToastComponent;
