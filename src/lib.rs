// 公共API暴露
mod config;
mod models;
mod reconciler;
mod utils;

// 暴露需要访问的类型与函数
pub use config::ExtensionConfiguration;
pub use models::{
    BuildFiles, CompileInfo, CustomMakefileRule, DefinitionsFile, Language, MakeInfo,
    Stm32Settings, TargetInfo, ToolChain, ToolchainPath,
};
pub use reconciler::{import_relevant_info, import_required_info};
pub use utils::is_debug_mode;
pub use utils::set_debug_mode;
