//! Plain-text rendering of the protobuf messages for the terminal.

use std::collections::BTreeMap;
use std::fmt::Write;

use bootcfg_grpc::proto::{Group, Profile};

/// One line per group: id, name, profile.
pub fn group_row(group: &Group) -> String {
    format!("{}\t{}\t{}", group.id, group.name, group.profile)
}

pub fn profile_row(profile: &Profile) -> String {
    format!("{}\t{}", profile.id, profile.name)
}

pub fn describe_group(group: &Group) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "ID:       {}", group.id);
    let _ = writeln!(out, "Name:     {}", group.name);
    let _ = writeln!(out, "Profile:  {}", group.profile);
    // HashMap order is random; keep the output stable.
    let selector: BTreeMap<_, _> = group.selector.iter().collect();
    if selector.is_empty() {
        let _ = writeln!(out, "Selector: <none>");
    } else {
        let _ = writeln!(out, "Selector:");
        for (key, value) in selector {
            let _ = writeln!(out, "  {key}={value}");
        }
    }
    if !group.metadata.is_empty() {
        let _ = writeln!(out, "Metadata: {}", String::from_utf8_lossy(&group.metadata));
    }
    out
}

pub fn describe_profile(profile: &Profile) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "ID:       {}", profile.id);
    let _ = writeln!(out, "Name:     {}", profile.name);
    for (label, value) in [
        ("Ignition", &profile.ignition_id),
        ("Cloud", &profile.cloud_id),
        ("Generic", &profile.generic_id),
    ] {
        if !value.is_empty() {
            let _ = writeln!(out, "{:<9} {}", format!("{label}:"), value);
        }
    }
    if let Some(boot) = &profile.boot {
        let _ = writeln!(out, "Kernel:   {}", boot.kernel);
        if !boot.initrd.is_empty() {
            let _ = writeln!(out, "Initrd:   {}", boot.initrd.join(" "));
        }
        if !boot.args.is_empty() {
            let _ = writeln!(out, "Args:     {}", boot.args.join(" "));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use bootcfg_grpc::proto::NetBoot;

    #[test]
    fn group_selector_is_sorted() {
        let group = Group {
            id: "node1".into(),
            name: "Worker Node".into(),
            profile: "worker".into(),
            selector: [
                ("mac".to_string(), "52:54:00:a1:9c:ae".to_string()),
                ("os".to_string(), "installed".to_string()),
            ]
            .into_iter()
            .collect(),
            metadata: br#"{"pxe":"true"}"#.to_vec(),
        };

        let text = describe_group(&group);
        let mac = text.find("mac=52:54:00:a1:9c:ae").unwrap();
        let os = text.find("os=installed").unwrap();
        assert!(mac < os);
        assert!(text.contains(r#"Metadata: {"pxe":"true"}"#));
        assert_eq!(group_row(&group), "node1\tWorker Node\tworker");
    }

    #[test]
    fn profile_skips_empty_fields() {
        let profile = Profile {
            id: "worker".into(),
            name: "Worker".into(),
            ignition_id: "worker.yaml".into(),
            boot: Some(NetBoot {
                kernel: "/assets/vmlinuz".into(),
                initrd: vec!["/assets/initrd.img".into()],
                args: vec![],
            }),
            ..Profile::default()
        };

        let text = describe_profile(&profile);
        assert!(text.contains("Ignition: worker.yaml"));
        assert!(!text.contains("Cloud:"));
        assert!(text.contains("Initrd:   /assets/initrd.img"));
        assert!(!text.contains("Args:"));
    }
}
