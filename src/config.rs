// src/config.rs

use crate::{
    db::{TimeoutSource, WarehouseRepository, DEFAULT_LOOKUP_DELAY},
    services::WarehouseService,
};
use std::{env, sync::Arc, time::Duration};

// Configurações lidas do ambiente (ou do .env)
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub bind_addr: String,
    pub lookup_delay: Duration,
    pub lookup_timeout: Duration,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            bind_addr: "0.0.0.0:3000".to_string(),
            lookup_delay: DEFAULT_LOOKUP_DELAY,
            lookup_timeout: Duration::from_secs(5),
        }
    }
}

impl Settings {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    // Separado do `env` para poder testar sem mexer no processo
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let defaults = Self::default();

        let bind_addr = lookup("BIND_ADDR").unwrap_or(defaults.bind_addr);
        let lookup_delay = match lookup("LOOKUP_DELAY_MS") {
            Some(raw) => Duration::from_millis(parse_millis("LOOKUP_DELAY_MS", &raw)?),
            None => defaults.lookup_delay,
        };
        let lookup_timeout = match lookup("LOOKUP_TIMEOUT_MS") {
            Some(raw) => Duration::from_millis(parse_millis("LOOKUP_TIMEOUT_MS", &raw)?),
            None => defaults.lookup_timeout,
        };

        Ok(Self {
            bind_addr,
            lookup_delay,
            lookup_timeout,
        })
    }
}

fn parse_millis(key: &str, raw: &str) -> anyhow::Result<u64> {
    raw.trim()
        .parse::<u64>()
        .map_err(|e| anyhow::anyhow!("{key} deve ser um número de milissegundos ('{raw}'): {e}"))
}

#[derive(Clone)]
pub struct AppState {
    pub settings: Settings,
    pub warehouse_service: WarehouseService,
}

impl AppState {
    pub fn new(settings: &Settings) -> anyhow::Result<Self> {
        // --- Monta o gráfico de dependências ---
        let repository = WarehouseRepository::seeded(settings.lookup_delay)?;
        let source = TimeoutSource::new(repository, settings.lookup_timeout);
        let warehouse_service = WarehouseService::new(Arc::new(source));

        tracing::info!(
            delay_ms = u64::try_from(settings.lookup_delay.as_millis()).unwrap_or(u64::MAX),
            timeout_ms = u64::try_from(settings.lookup_timeout.as_millis()).unwrap_or(u64::MAX),
            "✅ Hierarquia do armazém carregada"
        );

        Ok(Self {
            settings: settings.clone(),
            warehouse_service,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        let settings = Settings::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.lookup_delay, Duration::from_millis(300));
    }

    #[test]
    fn reads_overrides() {
        let settings = Settings::from_lookup(lookup_from(&[
            ("BIND_ADDR", "127.0.0.1:8080"),
            ("LOOKUP_DELAY_MS", "0"),
            ("LOOKUP_TIMEOUT_MS", " 1500 "),
        ]))
        .unwrap();

        assert_eq!(settings.bind_addr, "127.0.0.1:8080");
        assert_eq!(settings.lookup_delay, Duration::ZERO);
        assert_eq!(settings.lookup_timeout, Duration::from_millis(1500));
    }

    #[test]
    fn app_state_accepts_durations_beyond_u64_millis() {
        let settings = Settings {
            lookup_delay: Duration::ZERO,
            lookup_timeout: Duration::MAX,
            ..Settings::default()
        };
        let state = AppState::new(&settings).unwrap();
        assert_eq!(state.settings.lookup_timeout, Duration::MAX);
    }

    #[test]
    fn rejects_invalid_numbers() {
        let err = Settings::from_lookup(lookup_from(&[("LOOKUP_DELAY_MS", "fast")])).unwrap_err();
        assert!(err.to_string().contains("LOOKUP_DELAY_MS"));
    }
}
