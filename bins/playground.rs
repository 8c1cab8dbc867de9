use chrono::Utc;
use dotenvy::dotenv;
use models::account::Account;
use models::location::Location;
use models::message::Message;
use models::user::User;
use models::Model;
use service::{Persist, Store, StoreError};
use tracing::{error, info, warn};
use uuid::Uuid;

fn load_config() -> configs::AppConfig {
    match configs::AppConfig::load_and_validate() {
        Ok(cfg) => cfg,
        Err(e) => {
            // logging is not up yet
            eprintln!("config unavailable ({e}); using defaults");
            configs::AppConfig::default()
        }
    }
}

fn init_logging(cfg: &configs::LoggingConfig) {
    // .env first so RUST_LOG takes effect
    dotenv().ok();
    let format = if cfg.is_json() { common::LogFormat::Json } else { common::LogFormat::Compact };
    // stdout carries the snapshot
    common::init_logging_to(format, common::LogTarget::Stderr, cfg.filter.as_deref());
    info!(service = "playground", event = "logger_init", "tracing subscriber initialized");
}

fn new_user(store: &mut Store, username: &str, password: &str) -> Result<User, StoreError> {
    let mut user = User::create(store)?;
    user.username = Some(username.into());
    user.password = Some(password.into());
    user.save(store)?;
    Ok(user)
}

/// Walk every model through save, find and destroy.
fn run(store: &mut Store) -> Result<(), StoreError> {
    let alice = new_user(store, "alice", "hunter1")?;
    let bob = new_user(store, "bob", "hunter2")?;
    let carol = new_user(store, "carol", "hunter3")?;

    for (owner, number, address, balance) in [(&alice, 1234, "1234 HI", 12.34), (&bob, 4567, "4567 HI", 45.67)] {
        let mut account = Account::create(store)?;
        account.user = Some(owner.clone());
        account.account_number = Some(number);
        account.address = Some(address.into());
        account.balance = Some(balance);
        account.save(store)?;
    }

    for (from, to, text) in [(&alice, &bob, "hi"), (&bob, &alice, ":)")] {
        let mut message = Message {
            from: Some(from.clone()),
            to: Some(to.clone()),
            message: Some(text.into()),
            sent: Some(Utc::now()),
            ..Default::default()
        };
        message.save(store)?;
    }

    for (lat, lng) in [(21.308857, -157.808458), (21.292034, -157.821608)] {
        let mut location = Location { lat: Some(lat), lng: Some(lng), ..Default::default() };
        location.save(store)?;
    }

    if carol.destroy(store)? {
        let username = carol.field("username")?;
        info!(event = "destroyed", model = User::TYPE_NAME, id = ?carol.id, %username, "user removed");
    }
    if let Some(id) = carol.id {
        if User::find(store, id)?.is_some() {
            warn!(event = "still_present", id, "destroyed user is still findable");
        }
    }

    for type_name in store.type_names() {
        info!(event = "space", model = type_name, records = store.len(type_name), "store space summary");
    }
    let (next_user, next_account) = (User::next_id(store)?, Account::next_id(store)?);
    info!(event = "next_ids", next_user, next_account, "next ids");
    Ok(())
}

fn main() -> std::process::ExitCode {
    let cfg = load_config();
    init_logging(&cfg.logging);

    let run_id = Uuid::new_v4();
    let version = env!("CARGO_PKG_VERSION");

    std::panic::set_hook(Box::new(move |info| {
        error!(service = "playground", event = "panic", %run_id, message = %info, "unhandled panic occurred");
    }));

    info!(service = "playground", event = "start", %run_id, version, capacity = cfg.store.initial_capacity, "playground starting");

    let mut store = Store::with_capacity(cfg.store.initial_capacity);
    if let Err(e) = run(&mut store) {
        error!(service = "playground", event = "run_failed", error = %e, "scenario failed");
        return std::process::ExitCode::FAILURE;
    }

    let rendered = store.snapshot().and_then(|snapshot| serde_json::to_string_pretty(&snapshot).map_err(StoreError::from));
    match rendered {
        Ok(json) => {
            println!("{json}");
            info!(service = "playground", event = "stop", %run_id, "playground finished");
            std::process::ExitCode::SUCCESS
        }
        Err(e) => {
            error!(service = "playground", event = "snapshot_failed", error = %e, "cannot render store");
            std::process::ExitCode::FAILURE
        }
    }
}
