use serde::{Deserialize, Serialize};

/// 工具链路径：已解析为具体路径，或尚未解析
///
/// 持久化格式沿用扩展旧配置的 `string | boolean` 联合：已解析写为
/// 字符串，未解析写为 JSON 布尔 false。"未解析"与"解析为空字符串"
/// 是两个可观察的不同状态，下游构建步骤必须拒绝未解析的必需路径，
/// 而不是当作空路径继续执行。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ToolchainPath {
    /// 由路径发现步骤解析出的路径
    Resolved(String),
    /// 尚未配置
    #[default]
    Unresolved,
}

impl ToolchainPath {
    pub fn is_resolved(&self) -> bool {
        matches!(self, ToolchainPath::Resolved(_))
    }

    /// 已解析时返回路径字符串，未解析返回 None
    pub fn as_str(&self) -> Option<&str> {
        match self {
            ToolchainPath::Resolved(path) => Some(path.as_str()),
            ToolchainPath::Unresolved => None,
        }
    }
}

impl Serialize for ToolchainPath {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match self {
            ToolchainPath::Resolved(path) => serializer.serialize_str(path),
            ToolchainPath::Unresolved => serializer.serialize_bool(false),
        }
    }
}

impl<'de> Deserialize<'de> for ToolchainPath {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        // 旧配置里偶见 true，任何布尔值都按未解析处理
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Path(String),
            Flag(bool),
        }
        Ok(match Repr::deserialize(deserializer)? {
            Repr::Path(path) => ToolchainPath::Resolved(path),
            Repr::Flag(_) => ToolchainPath::Unresolved,
        })
    }
}

/// 三个必需外部程序的路径集合：交叉工具链、构建驱动、调试探针服务
///
/// 本类型不做任何校验，消费方必须自行把未解析路径视为"未配置"。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ToolChain {
    pub arm_toolchain_path: ToolchainPath,
    pub make_path: ToolchainPath,
    #[serde(rename = "openOCDPath")]
    pub openocd_path: ToolchainPath,
}

impl ToolChain {
    /// 从用户级工作区设置构造，空字符串视为未解析
    pub fn from_settings(settings: &Stm32Settings) -> Self {
        let resolve = |path: &str| {
            if path.is_empty() {
                ToolchainPath::Unresolved
            } else {
                ToolchainPath::Resolved(path.to_string())
            }
        };
        ToolChain {
            arm_toolchain_path: resolve(&settings.arm_toolchain_path),
            make_path: resolve(&settings.make_path),
            openocd_path: resolve(&settings.openocd_path),
        }
    }
}

/// 用户级工作区设置，由外部路径发现步骤写入
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Stm32Settings {
    pub arm_toolchain_path: String,
    #[serde(rename = "openOCDPath")]
    pub openocd_path: String,
    pub make_path: String,
    #[serde(rename = "openOCDInterface")]
    pub openocd_interface: String,
}

/// 项目主语言
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Language {
    #[default]
    #[serde(rename = "C")]
    C,
    #[serde(rename = "C++")]
    Cxx,
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Language::C => write!(f, "C"),
            Language::Cxx => write!(f, "C++"),
        }
    }
}

/// 硬件目标标识
///
/// 空字符串表示"尚未确定"。六个字段对同一块板卡总是整体设置，
/// 不存在只有部分字段有意义的状态。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TargetInfo {
    pub target: String,
    pub cpu: String,
    pub fpu: String,
    pub float_abi: String,
    #[serde(rename = "targetMCU")]
    pub target_mcu: String,
    pub ldscript: String,
}

/// 外部宏定义文件引用，单个路径或一组路径
///
/// 本模块只携带引用；存在时由外部 Makefile 写出器让它优先于
/// 对应语言的内联宏定义列表。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DefinitionsFile {
    Single(String),
    Multiple(Vec<String>),
}

/// 编译配置：语言、优化等级、各语言的标志与宏定义列表
///
/// 所有列表保持插入顺序且不去重，标志顺序影响编译器行为。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CompileInfo {
    pub language: Language,
    pub optimization: String,
    pub c_flags: Vec<String>,
    pub assembly_flags: Vec<String>,
    pub cxx_flags: Vec<String>,
    pub linker_flags: Vec<String>,
    pub c_definitions: Vec<String>,
    pub cxx_definitions: Vec<String>,
    pub as_definitions: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub c_definitions_file: Option<DefinitionsFile>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cxx_definitions_file: Option<DefinitionsFile>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub as_definitions_file: Option<DefinitionsFile>,
}

impl Default for CompileInfo {
    fn default() -> Self {
        CompileInfo {
            language: Language::C,
            // 默认面向调试的优化等级
            optimization: "Og".to_string(),
            c_flags: Vec::new(),
            assembly_flags: Vec::new(),
            cxx_flags: Vec::new(),
            linker_flags: Vec::new(),
            c_definitions: Vec::new(),
            cxx_definitions: Vec::new(),
            as_definitions: Vec::new(),
            c_definitions_file: None,
            cxx_definitions_file: None,
            as_definitions_file: None,
        }
    }
}

/// 项目的可编译输入与链接输入
///
/// 顺序由调用方保证（链接行顺序敏感），本模块不去重。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BuildFiles {
    pub c_includes: Vec<String>,
    pub c_sources: Vec<String>,
    pub cxx_sources: Vec<String>,
    pub asm_sources: Vec<String>,
    pub libs: Vec<String>,
    pub libdir: Vec<String>,
}

/// 自定义 Makefile 规则，本模块不解释也不校验，原样透传给写出器
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomMakefileRule {
    pub command: String,
    pub rule: String,
    #[serde(rename = "dependsOn", skip_serializing_if = "Option::is_none")]
    pub depends_on: Option<String>,
}

/// Makefile 解析器产出的中间模型
///
/// 注意：宏定义字段使用缩写名（cDefs/cxxDefs/asDefs，链接标志为
/// ldFlags），与 ExtensionConfiguration 的全名字段语义相同。缩写
/// 由下游 Makefile 文法要求，两边靠 reconciler 对齐语义，绝不靠
/// 改名对齐。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MakeInfo {
    pub c_defs: Vec<String>,
    pub cxx_defs: Vec<String>,
    pub as_defs: Vec<String>,
    #[serde(flatten)]
    pub build_files: BuildFiles,
    /// 大写 .S 汇编源单独跟踪
    pub asmm_sources: Vec<String>,
    pub tools: ToolChain,
    #[serde(flatten)]
    pub target_info: TargetInfo,
    /// 原始 MCU 家族标记，区别于完整型号 targetMCU
    pub mcu: String,
    pub language: Language,
    pub optimization: String,
    pub c_flags: Vec<String>,
    pub assembly_flags: Vec<String>,
    pub ld_flags: Vec<String>,
    pub cxx_flags: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_makefile_rules: Option<Vec<CustomMakefileRule>>,
    pub make_flags: Vec<String>,
}

impl Default for MakeInfo {
    fn default() -> Self {
        MakeInfo {
            c_defs: Vec::new(),
            cxx_defs: Vec::new(),
            as_defs: Vec::new(),
            build_files: BuildFiles::default(),
            asmm_sources: Vec::new(),
            tools: ToolChain::default(),
            target_info: TargetInfo::default(),
            mcu: String::new(),
            language: Language::C,
            optimization: "Og".to_string(),
            c_flags: Vec::new(),
            assembly_flags: Vec::new(),
            ld_flags: Vec::new(),
            cxx_flags: Vec::new(),
            custom_makefile_rules: None,
            make_flags: Vec::new(),
        }
    }
}
