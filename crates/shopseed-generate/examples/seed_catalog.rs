use std::env;
use std::path::PathBuf;

use shopseed_core::EntityId;
use shopseed_generate::{
    CatalogGenerator, CatalogPlan, GeneratorConfig, InMemoryCatalogStore, LocaleKey, LogFormat,
    init_tracing,
};

fn parse_ids(value: &str) -> Result<Vec<EntityId>, Box<dyn std::error::Error>> {
    value
        .split(',')
        .filter(|part| !part.trim().is_empty())
        .map(|part| -> Result<EntityId, Box<dyn std::error::Error>> { Ok(part.parse()?) })
        .collect()
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut args = env::args().skip(1);
    let mut config_path: Option<PathBuf> = None;
    let mut plan_path: Option<PathBuf> = None;
    let mut seed: Option<u64> = None;
    let mut locale: Option<LocaleKey> = None;
    let mut log_format = LogFormat::Pretty;
    let mut attachments = Vec::new();
    let mut brands = Vec::new();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--config" => config_path = args.next().map(PathBuf::from),
            "--plan" => plan_path = args.next().map(PathBuf::from),
            "--seed" => seed = args.next().map(|value| value.parse::<u64>()).transpose()?,
            "--locale" => {
                let value = args.next().ok_or("missing locale")?;
                locale = Some(LocaleKey::parse(&value).ok_or("unknown locale")?);
            }
            "--json" => log_format = LogFormat::Json,
            "--attachments" => attachments = parse_ids(&args.next().ok_or("missing ids")?)?,
            "--brands" => brands = parse_ids(&args.next().ok_or("missing ids")?)?,
            _ => return Err(format!("unexpected argument '{arg}'").into()),
        }
    }

    init_tracing(log_format)?;

    let mut config = match config_path {
        Some(path) => GeneratorConfig::load(&path)?,
        None => GeneratorConfig::default(),
    };
    if let Some(seed) = seed {
        config = config.with_seed(seed);
    }
    if let Some(locale) = locale {
        config.locale = locale;
    }
    let plan: CatalogPlan = match plan_path {
        Some(path) => toml::from_str(&std::fs::read_to_string(path)?)?,
        None => CatalogPlan::default(),
    };

    let mut generator = CatalogGenerator::new(config, InMemoryCatalogStore::new())?;
    let report = generator.generate_catalog(&plan, &attachments, &brands)?;

    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
