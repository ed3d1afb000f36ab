mod loader;
mod model;
mod settings;
mod validation;

pub use loader::{
    ConfigLoader, FileConfigLoader, FileSystem, LOCAL_CONFIG_NAME, LoadResult, RealFileSystem,
};
pub use model::{
    CONFIG_VERSION, CategoriesConfig, ClonesSection, CodebasesConfig, CommentingSection, Config,
    DocSection, EngineConfig, MissingOverrideSection, OrderingSection, ReportConfig, ScoringMode,
    ScoringSection, TemplateConfig,
};
pub use settings::{CategoryConfig, CategoryParams, CommentingParams, Settings};
pub use validation::validate_config_semantics;
