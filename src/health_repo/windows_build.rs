// Windows build number -> release label

/// (minimum build, label), highest threshold first. First match wins.
const BUILD_TABLE: &[(u32, &str)] = &[
    (26100, "Version 24H2"),
    (22631, "Version 23H2"),
    (22621, "Version 22H2"),
    (22000, "Version 21H2 (Win 11)"),
    (19045, "Version 22H2 (Win 10)"),
    (19044, "Version 21H2 (Win 10)"),
    (19043, "Version 21H1"),
];

/// First build of Windows 11.
const WINDOWS_11_MIN_BUILD: u32 = 22000;

pub fn version_label(build: u32) -> String {
    BUILD_TABLE
        .iter()
        .find(|(min, _)| build >= *min)
        .map(|(_, label)| (*label).to_string())
        .unwrap_or_else(|| format!("Build {build}"))
}

/// Build number from "10.0.19045" (third component) or a bare "19045".
pub fn parse_build(release: &str) -> Option<u32> {
    let parts: Vec<&str> = release.trim().split('.').collect();
    let field = if parts.len() >= 3 { parts[2] } else { parts[0] };
    let digits: String = field.chars().take_while(|c| c.is_ascii_digit()).collect();
    digits.parse().ok()
}

/// Readable version for a raw release string; unparsable input passes through unchanged.
pub fn readable_version(release: &str) -> String {
    match parse_build(release) {
        Some(build) => version_label(build),
        None => release.to_string(),
    }
}

pub fn friendly_name(build: Option<u32>) -> &'static str {
    match build {
        Some(b) if b >= WINDOWS_11_MIN_BUILD => "Windows 11",
        _ => "Windows 10",
    }
}
