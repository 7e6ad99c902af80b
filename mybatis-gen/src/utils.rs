/// # mybatis-gen 日志说明
///
/// - 库代码（codegen-core）只使用 `tracing` 宏
/// - 应用入口在 `main.rs` 中调用 `setup_logging()`
/// - 生成内容（`--dry-run`）输出到标准输出，日志统一输出到标准错误，二者互不干扰
///
/// ## 配置选项
/// - `-v, --verbose`：启用 DEBUG 级别
/// - `RUST_LOG`：标准的日志级别过滤，如 `RUST_LOG=codegen_core::ddl=debug`
/// - `MYBATIS_GEN_LOG_FILE`：日志文件路径，设置后日志追加到文件而非终端
///
/// 无论上面如何配置，ERROR 级别的日志都会写到标准错误
pub fn setup_logging(verbose: bool) {
    use tracing::Level;
    use tracing_subscriber::filter::LevelFilter;
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    // 根据verbose参数和环境变量确定日志级别
    let default_level = if verbose { "debug" } else { "info" };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    // 标准错误按级别拆成两路：WARN 及以下走常规输出，ERROR 单独输出
    let (stderr_below_error, stderr_error_only) = {
        use tracing_subscriber::fmt::writer::MakeWriterExt;
        (
            std::io::stderr.with_min_level(Level::WARN),
            std::io::stderr.with_max_level(Level::ERROR),
        )
    };

    let log_file = std::env::var("MYBATIS_GEN_LOG_FILE").ok().map(|path| {
        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path);
        (path, file)
    });

    let (primary_layer, open_error) = match log_file {
        Some((_, Ok(file))) => {
            // 输出到文件 - 使用详细格式便于调试
            let layer = fmt::layer()
                .with_writer(file)
                .with_ansi(false)
                .with_target(true)
                .with_line_number(true)
                .boxed();
            (layer, None)
        }
        other => {
            // 输出到终端 - 使用简洁格式，ERROR 由下面的错误层负责
            let layer = fmt::layer()
                .with_writer(stderr_below_error)
                .with_target(false) // 不显示模块路径
                .with_line_number(false) // 不显示行号
                .without_time() // 不显示时间戳
                .compact() // 使用紧凑格式
                .boxed();
            (layer, other.and_then(|(path, file)| file.err().map(|e| (path, e))))
        }
    };

    // ERROR 始终写到标准错误，不受 RUST_LOG 和日志文件影响
    let error_layer = fmt::layer()
        .with_writer(stderr_error_only)
        .with_target(false)
        .without_time()
        .compact()
        .with_filter(LevelFilter::ERROR);

    tracing_subscriber::registry()
        .with(primary_layer.with_filter(env_filter))
        .with(error_layer)
        .init();

    if let Some((path, e)) = open_error {
        tracing::warn!("无法打开日志文件 {}: {}，改为输出到终端", path, e);
    }
}
