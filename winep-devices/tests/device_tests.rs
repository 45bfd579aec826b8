use std::collections::HashMap;
use winep_common::{DeviceSource, DeviceType, EpDevice, EpMetadata, SessionOptions};
use winep_devices::{diagnose, select_and_attach, SkewClassification};

struct FakeDeviceSource {
    devices: Vec<EpDevice>,
}

impl DeviceSource for FakeDeviceSource {
    fn ep_devices(&self) -> Vec<EpDevice> {
        self.devices.clone()
    }
}

fn openvino_gpu(identifier: Option<&str>, version: Option<&str>) -> EpDevice {
    let mut metadata = EpMetadata::default();
    if let Some(identifier) = identifier {
        metadata = metadata.with_device_identifier(identifier);
    }
    if let Some(version) = version {
        metadata = metadata.with_plugin_version(version);
    }
    EpDevice::new("OpenVINOExecutionProvider", DeviceType::Gpu).with_metadata(metadata)
}

// ── Selector ──────────────────────────────────────────────────────────────

#[test]
fn test_first_match_wins() {
    let first = EpDevice::new("OpenVINOExecutionProvider", DeviceType::Gpu)
        .with_metadata(EpMetadata::default().with_extra("instance", "0"));
    let second = EpDevice::new("OpenVINOExecutionProvider", DeviceType::Gpu)
        .with_metadata(EpMetadata::default().with_extra("instance", "1"));
    let cpu = EpDevice::new("OpenVINOExecutionProvider", DeviceType::Cpu);
    let source = FakeDeviceSource {
        devices: vec![first.clone(), second, cpu],
    };

    let mut config = SessionOptions::new();
    let attached = select_and_attach(
        &source,
        &mut config,
        "OpenVINOExecutionProvider",
        DeviceType::Gpu,
        &HashMap::new(),
    );

    assert!(attached);
    assert_eq!(config.attachments().len(), 1);
    assert_eq!(config.attachments()[0].devices, vec![first]);
}

#[test]
fn test_both_name_and_type_must_match() {
    let source = FakeDeviceSource {
        devices: vec![
            EpDevice::new("QNNExecutionProvider", DeviceType::Gpu),
            EpDevice::new("OpenVINOExecutionProvider", DeviceType::Cpu),
        ],
    };

    let mut config = SessionOptions::new();
    let attached = select_and_attach(
        &source,
        &mut config,
        "OpenVINOExecutionProvider",
        DeviceType::Gpu,
        &HashMap::new(),
    );

    assert!(!attached);
    assert!(config.is_empty());
}

#[test]
fn test_options_are_forwarded() {
    let source = FakeDeviceSource {
        devices: vec![openvino_gpu(Some("GPU"), None)],
    };
    let mut options = HashMap::new();
    options.insert("device_type".to_string(), "GPU".to_string());

    let mut config = SessionOptions::new();
    assert!(select_and_attach(
        &source,
        &mut config,
        "OpenVINOExecutionProvider",
        DeviceType::Gpu,
        &options,
    ));
    assert_eq!(
        config.attachments()[0]
            .options
            .get("device_type")
            .map(String::as_str),
        Some("GPU")
    );
}

// ── Diagnostics ───────────────────────────────────────────────────────────

#[test]
fn test_suffixed_identifier_is_version_skew() {
    let devices = vec![openvino_gpu(Some("GPU.0"), Some("1.8.63.0"))];
    let report = diagnose(&devices, "OpenVINOExecutionProvider", Some("GPU"));

    let diagnosis = &report.devices[0];
    assert!(!diagnosis.exact_match);
    assert!(diagnosis.substring_match);
    assert_eq!(diagnosis.classification, SkewClassification::VersionSkew);
}

#[test]
fn test_bare_identifier_is_compatible() {
    let devices = vec![openvino_gpu(Some("GPU"), Some("1.8.62.0"))];
    let report = diagnose(&devices, "OpenVINOExecutionProvider", Some("GPU"));

    let diagnosis = &report.devices[0];
    assert!(diagnosis.exact_match);
    assert_eq!(diagnosis.classification, SkewClassification::Compatible);
}

#[test]
fn test_missing_metadata_is_reported_not_raised() {
    let devices = vec![openvino_gpu(None, None)];
    let report = diagnose(&devices, "OpenVINOExecutionProvider", Some("GPU"));

    let diagnosis = &report.devices[0];
    assert!(diagnosis.device_identifier.is_none());
    assert!(diagnosis.plugin_version.is_none());
    assert!(!diagnosis.exact_match);
    assert!(!diagnosis.substring_match);
    assert_eq!(diagnosis.classification, SkewClassification::Mismatch);

    let rendered = report.to_string();
    assert!(rendered.contains("(not set)"));
    assert!(rendered.contains("(unknown)"));
}

#[test]
fn test_unrelated_identifier_is_mismatch() {
    let devices = vec![openvino_gpu(Some("NPU"), None)];
    let report = diagnose(&devices, "OpenVINOExecutionProvider", Some("GPU"));

    let diagnosis = &report.devices[0];
    assert!(!diagnosis.exact_match);
    assert!(!diagnosis.substring_match);
    assert_eq!(diagnosis.classification, SkewClassification::Mismatch);
}

#[test]
fn test_no_requested_type_is_not_checked() {
    let devices = vec![openvino_gpu(Some("GPU.0"), None)];
    let report = diagnose(&devices, "OpenVINOExecutionProvider", None);

    assert_eq!(
        report.devices[0].classification,
        SkewClassification::NotChecked
    );
    assert!(!report.devices[0].exact_match);
    assert!(!report.devices[0].substring_match);
}

#[test]
fn test_devices_filtered_by_provider_name() {
    let devices = vec![
        openvino_gpu(Some("GPU"), None),
        EpDevice::new("QNNExecutionProvider", DeviceType::Npu),
    ];
    let report = diagnose(&devices, "OpenVINOExecutionProvider", Some("GPU"));

    assert_eq!(report.devices.len(), 1);
    assert_eq!(report.devices[0].ep_name, "OpenVINOExecutionProvider");
}

#[test]
fn test_empty_report_renders_a_notice() {
    let report = diagnose(&[], "OpenVINOExecutionProvider", Some("GPU"));
    assert!(report.devices.is_empty());
    assert!(report
        .to_string()
        .contains("no devices found for OpenVINOExecutionProvider"));
}

#[test]
fn test_skew_report_explains_host_semantics() {
    let devices = vec![openvino_gpu(Some("GPU.0"), Some("1.8.63.0"))];
    let report = diagnose(&devices, "OpenVINOExecutionProvider", Some("GPU"));
    let rendered = report.to_string();

    assert!(rendered.contains("ov_device='GPU.0'"));
    assert!(rendered.contains("exact=MISMATCH"));
    assert!(rendered.contains("exact equality will FAIL"));
    assert!(rendered.contains("substring will PASS"));
}

#[test]
fn test_report_serializes() {
    let devices = vec![openvino_gpu(Some("GPU.0"), Some("1.8.63.0"))];
    let report = diagnose(&devices, "OpenVINOExecutionProvider", Some("GPU"));

    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["devices"][0]["classification"], "version_skew");
}
