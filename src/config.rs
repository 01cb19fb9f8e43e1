use serde::{Deserialize, Serialize};

use crate::models::{CompileInfo, CustomMakefileRule, TargetInfo};

/// IDE 侧的扩展配置模型，由 IDE 持久化并供用户直接编辑
///
/// 结构上与 MakeInfo 对应，但字段用全名（cDefinitions 等），并带
/// 面向用户的默认值：用户在第一份 Makefile 存在之前看到的就是这套
/// 默认配置，因此默认值本身是对外可见的行为，改动必须连同测试一起。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ExtensionConfiguration {
    /// 排除的 glob 模式；引号是模式的一部分，会原样进入生成的 Makefile
    pub excludes: Vec<String>,
    #[serde(flatten)]
    pub target_info: TargetInfo,
    #[serde(flatten)]
    pub compile: CompileInfo,
    pub include_directories: Vec<String>,
    pub source_files: Vec<String>,
    pub libraries: Vec<String>,
    pub library_directories: Vec<String>,
    pub suppress_makefile_warning: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_makefile_rules: Option<Vec<CustomMakefileRule>>,
    pub make_flags: Vec<String>,
}

impl Default for ExtensionConfiguration {
    fn default() -> Self {
        ExtensionConfiguration {
            excludes: vec![
                "\"**/Examples/**\"".to_string(),
                "\"**/examples/**\"".to_string(),
                "\"**/Example/**\"".to_string(),
                "\"**/example/**\"".to_string(),
                "\"**_template.*\"".to_string(),
            ],
            target_info: TargetInfo::default(),
            compile: CompileInfo {
                linker_flags: vec![
                    // 输出内存占用分析
                    "-Wl,--print-memory-usage".to_string(),
                ],
                // Makefile 里通常还有更多标志，这几个是必选的
                c_flags: vec![
                    "-Wall".to_string(),
                    "-fdata-sections".to_string(),
                    "-ffunction-sections".to_string(),
                ],
                assembly_flags: vec![
                    "-Wall".to_string(),
                    "-fdata-sections".to_string(),
                    "-ffunction-sections".to_string(),
                ],
                // 关闭 rtti 和异常以减小体积
                cxx_flags: vec!["-fno-rtti".to_string(), "-fno-exceptions".to_string()],
                ..CompileInfo::default()
            },
            include_directories: Vec::new(),
            source_files: Vec::new(),
            libraries: vec!["c".to_string(), "m".to_string()],
            library_directories: Vec::new(),
            suppress_makefile_warning: false,
            custom_makefile_rules: None,
            make_flags: Vec::new(),
        }
    }
}

impl ExtensionConfiguration {
    /// 从 IDE 持久化的 JSON 文本恢复配置，缺失字段落回默认值
    pub fn from_json(text: &str) -> serde_json::Result<Self> {
        serde_json::from_str(text)
    }

    /// 序列化为带缩进的 JSON，交给 IDE 的持久化层写盘
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
