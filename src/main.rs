use dotenv::dotenv;
use human_panic::setup_panic;
use tracing::{info, warn};

// 从 lib.rs 导入模块
use rust_assigntrack::config::AppConfig;
use rust_assigntrack::policy;
use rust_assigntrack::storage::{self, PersistenceAdapter, SeedData};
use rust_assigntrack::store::EntityStore;

fn main() {
    dotenv().ok();

    // 启动前预处理 //

    // 初始化配置
    setup_panic!();
    AppConfig::init().expect("Failed to initialize configuration");
    let config = AppConfig::get();

    // 初始化日志
    let stdout_log = std::io::stdout();
    let (non_blocking_writer, _guard) = tracing_appender::non_blocking(stdout_log);
    let filter = tracing_subscriber::EnvFilter::new(&config.app.log_level);
    let tracing_format = tracing_subscriber::fmt::format()
        .with_level(true)
        .with_ansi(true);

    let tracing_builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(non_blocking_writer)
        .event_format(tracing_format);

    if config.is_development() {
        tracing_builder
            .with_file(true)
            .with_line_number(true)
            .init();
    } else {
        tracing_builder.json().init();
    }

    warn!(
        "Starting {} v{} ({} storage backend)",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION"),
        config.storage.backend
    );

    // 建立存储后端，失败时回退到内存后端
    let backend: std::sync::Arc<dyn storage::KeyValueStore> =
        match storage::create_kv_store(&config.storage) {
            Ok(backend) => backend,
            Err(e) => {
                warn!(
                    "Failed to create '{}' storage backend: {}. Falling back to memory backend",
                    config.storage.backend, e
                );
                std::sync::Arc::new(storage::memory::MemoryStore::new())
            }
        };

    let seed = if config.storage.seed_on_empty {
        storage::seed::default_seed()
    } else {
        SeedData::empty()
    };
    let store = EntityStore::load(PersistenceAdapter::new(backend), seed);

    // 预处理完成，输出集合概况 //

    let now = chrono::Utc::now();
    let mut assignments = store.assignments();
    policy::sort_for_listing(&mut assignments, now);

    info!(
        "{}: {} assignments, {} submissions",
        config.app.system_name,
        assignments.len(),
        store.submissions().len()
    );
    for assignment in &assignments {
        info!(
            "[{}] {} - due {}, {}, {} submissions",
            assignment.id,
            assignment.title,
            assignment.deadline.format("%Y-%m-%d %H:%M:%S"),
            policy::deadline_label(assignment, now),
            store.submissions_by_assignment(&assignment.id).len()
        );
    }
}
