use crate::kafka_api::proto::security_protocol_dto::PlaintextProtocolDto;
use crate::kafka_api::proto::{security_protocol_dto, ConnectionSettingsDto, SecurityProtocolDto};
use anyhow::bail;
use kafka_consumers::connection_settings::ConnectionSettings;
use kafka_consumers::consumer::SecurityProtocol;

pub fn proto_connection_setting_to_internal(
    model: Option<ConnectionSettingsDto>,
) -> Result<ConnectionSettings, anyhow::Error> {
    let Some(model) = model else {
        bail!("Connection settings can't be null")
    };
    if model.brokers.is_empty() {
        bail!("Brokers can't be empty")
    }
    let security_protocol = proto_security_protocol_to_protocol(model.security_protocol);
    Ok(ConnectionSettings {
        brokers: model.brokers,
        security_protocol,
    })
}

pub fn proto_security_protocol_to_protocol(model: Option<SecurityProtocolDto>) -> SecurityProtocol {
    let proto_protocol =
        model
            .and_then(|x| x.protocol)
            .unwrap_or(security_protocol_dto::Protocol::Plaintext(
                PlaintextProtocolDto {},
            ));
    match proto_protocol {
        security_protocol_dto::Protocol::Plaintext(_) => SecurityProtocol::Plaintext,
        security_protocol_dto::Protocol::Ssl(_) => SecurityProtocol::Ssl,
    }
}
