use crate::consumer::SecurityProtocol;
use anyhow::bail;
use rdkafka::ClientConfig;

#[derive(Debug, Clone)]
pub struct ConnectionSettings {
    pub brokers: Vec<String>,
    pub security_protocol: SecurityProtocol,
}

impl TryFrom<&ConnectionSettings> for ClientConfig {
    type Error = anyhow::Error;

    fn try_from(value: &ConnectionSettings) -> Result<Self, Self::Error> {
        if value.brokers.is_empty() {
            bail!("No brokers specified")
        }

        let mut config = ClientConfig::new();

        let brokers_string = value.brokers.join(",");
        config
            .set("bootstrap.servers", brokers_string)
            .set("security.protocol", value.security_protocol.to_string());

        if let Ok(value) = std::env::var("RD_KAFKA_DEBUG") {
            config.set("debug", value);
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_brokers_are_rejected() {
        let settings = ConnectionSettings {
            brokers: vec![],
            security_protocol: SecurityProtocol::Plaintext,
        };

        let error = ClientConfig::try_from(&settings).unwrap_err();

        assert_eq!(error.to_string(), "No brokers specified");
    }

    #[test]
    fn brokers_and_protocol_are_passed_to_client_config() {
        let settings = ConnectionSettings {
            brokers: vec!["kafka-1:9092".to_owned(), "kafka-2:9092".to_owned()],
            security_protocol: SecurityProtocol::Ssl,
        };

        let config = ClientConfig::try_from(&settings).unwrap();

        assert_eq!(
            config.get("bootstrap.servers"),
            Some("kafka-1:9092,kafka-2:9092")
        );
        assert_eq!(config.get("security.protocol"), Some("ssl"));
    }
}
