use crate::config::ExtensionConfiguration;
use crate::debug_println;
use crate::models::MakeInfo;

/// 将重新解析出的 Makefile 构建面事实并入扩展配置（就地修改）
///
/// 覆盖与追加的划分：标志、宏定义、库与目标标识视为 Makefile 完全
/// 决定的事实，整体覆盖；源文件与头文件目录常含用户手工维护的条目
/// （比如手动加入的示例文件），只追加不覆盖。追加不去重：对同一个
/// MakeInfo 重复调用会在 sourceFiles/includeDirectories 里产生重复
/// 条目，这是既定行为，测试里固定，不要顺手"修掉"。
///
/// 不触碰 language、optimization、excludes、宏定义文件引用、
/// suppressMakefileWarning、customMakefileRules 与 makeFlags。
pub fn import_relevant_info(config: &mut ExtensionConfiguration, info: &MakeInfo) {
    debug_println!("[DEBUG reconciler] Importing relevant makefile info...");

    config.compile.c_definitions = info.c_defs.clone();
    config.compile.cxx_definitions = info.cxx_defs.clone();
    config.compile.as_definitions = info.as_defs.clone();
    config.libraries = info.build_files.libs.clone();
    config.target_info = info.target_info.clone();
    config.compile.linker_flags = info.ld_flags.clone();
    config.compile.c_flags = info.c_flags.clone();
    config.compile.assembly_flags = info.assembly_flags.clone();
    config.compile.cxx_flags = info.cxx_flags.clone();
    config.library_directories = info.build_files.libdir.clone();

    // 追加顺序固定：先汇编，再 C，最后 C++
    config
        .source_files
        .extend(info.build_files.asm_sources.iter().cloned());
    config
        .source_files
        .extend(info.build_files.c_sources.iter().cloned());
    config
        .source_files
        .extend(info.build_files.cxx_sources.iter().cloned());
    config
        .include_directories
        .extend(info.build_files.c_includes.iter().cloned());

    debug_println!(
        "[DEBUG reconciler] Now tracking {} source files, {} include dirs",
        config.source_files.len(),
        config.include_directories.len()
    );
}

/// 只并入硬件标识相关字段：cpu、floatAbi、fpu、optimization、
/// ldscript、targetMCU、target
///
/// 用户换了目标板卡但想保留自定义标志和源文件列表时用这个窄导入。
/// 目标标识之间没有有意义的"并集"，所以全部直接覆盖，无追加语义。
pub fn import_required_info(config: &mut ExtensionConfiguration, info: &MakeInfo) {
    debug_println!(
        "[DEBUG reconciler] Importing required target info for {}",
        info.target_info.target_mcu
    );

    config.target_info = info.target_info.clone();
    config.compile.optimization = info.optimization.clone();
}
