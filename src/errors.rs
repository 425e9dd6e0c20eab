#[derive(Debug)]
pub enum EngineError {
    Layout(LayoutError),
    Config(ConfigError),
    Io(std::io::Error),
    Anyhow(anyhow::Error),
}

#[derive(Debug)]
pub enum LayoutError {
    InvalidTileBounds { tile_index: usize },
    OverlappingTiles { first: usize, second: usize },
}

#[derive(Debug)]
pub enum ConfigError {
    ParseError(ron::error::SpannedError),
    InvalidVariableName(String),
    InvalidDefine(String),
    UndefinedVariable(String),
    DuplicateLayout(String),
    UnknownLayout(String),
    InvalidLayout { name: String, source: LayoutError },
    NoLayouts,
}

impl std::fmt::Display for EngineError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Layout(error) => write!(f, "{}", error),
            Self::Config(error) => write!(f, "{}", error),
            Self::Io(error) => write!(f, "{}", error),
            Self::Anyhow(error) => write!(f, "{}", error),
        }
    }
}

impl std::error::Error for EngineError {}

impl std::fmt::Display for LayoutError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidTileBounds { tile_index } => {
                write!(
                    f,
                    "tile {} has fractional bounds outside the unit square",
                    tile_index
                )
            }
            Self::OverlappingTiles { first, second } => {
                write!(
                    f,
                    "tiles {} and {} overlap without sharing a group",
                    first, second
                )
            }
        }
    }
}

impl std::error::Error for LayoutError {}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ParseError(err) => write!(f, "Failed to parse RON config: {}", err),
            Self::InvalidVariableName(name) => {
                write!(f, "Invalid variable name '{}': must start with $", name)
            }
            Self::InvalidDefine(line) => {
                write!(f, "Invalid #DEFINE syntax: '{}'. Expected: #DEFINE $var_name = value", line)
            }
            Self::UndefinedVariable(var) => {
                write!(f, "Undefined variable '{}': define it with #DEFINE before use", var)
            }
            Self::DuplicateLayout(name) => {
                write!(f, "Layout '{}' is defined more than once", name)
            }
            Self::UnknownLayout(name) => write!(f, "Unknown layout: {}", name),
            Self::InvalidLayout { name, source } => {
                write!(f, "Layout '{}' is invalid: {}", name, source)
            }
            Self::NoLayouts => write!(f, "At least one layout is required"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<LayoutError> for EngineError {
    fn from(value: LayoutError) -> Self {
        Self::Layout(value)
    }
}

impl From<ConfigError> for EngineError {
    fn from(value: ConfigError) -> Self {
        Self::Config(value)
    }
}

impl From<std::io::Error> for EngineError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<anyhow::Error> for EngineError {
    fn from(value: anyhow::Error) -> Self {
        Self::Anyhow(value)
    }
}

impl From<ron::error::SpannedError> for ConfigError {
    fn from(value: ron::error::SpannedError) -> Self {
        ConfigError::ParseError(value)
    }
}
