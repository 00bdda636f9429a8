//! Capability profile lookup
//!
//! Profiles are named capability/version descriptors such as `vs_5_0` or
//! `spirv_1_3`. A lookup resolves the name to an opaque non-zero 32-bit ID;
//! an ID is not an owned resource and has no release.

/// Opaque identifier for a named capability profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ProfileId(u32);

impl ProfileId {
    /// The raw 32-bit value. Always non-zero; zero is the public "not
    /// found" sentinel.
    pub fn raw(&self) -> u32 {
        self.0
    }

    /// Reconstructs an ID from a raw value received back across an ABI
    /// boundary. The value is not checked against the known families.
    pub fn from_raw(raw: u32) -> ProfileId {
        ProfileId(raw)
    }
}

// Family tags occupy the high half of the ID so distinct profile spaces
// never collide.
const FAMILY_STAGE_BASE: u32 = 1; // vs/ps/gs/hs/ds/cs, one tag each
const FAMILY_SM: u32 = 7;
const FAMILY_SPIRV: u32 = 8;
const FAMILY_GLSL: u32 = 9;

const STAGE_PREFIXES: [&str; 6] = ["vs", "ps", "gs", "hs", "ds", "cs"];

/// Resolves a profile name to its ID, or `None` when the name does not
/// describe a known profile.
pub(crate) fn find(name: &str) -> Option<ProfileId> {
    let (prefix, rest) = name.split_once('_')?;

    if let Some(index) = STAGE_PREFIXES.iter().position(|p| *p == prefix) {
        let (major, minor) = parse_model(rest)?;
        return Some(encode(FAMILY_STAGE_BASE + index as u32, major, minor));
    }

    match prefix {
        "sm" => {
            let (major, minor) = parse_model(rest)?;
            Some(encode(FAMILY_SM, major, minor))
        }
        "spirv" => {
            let (major, minor) = split_version(rest)?;
            (major == 1 && minor <= 6).then(|| encode(FAMILY_SPIRV, major, minor))
        }
        "glsl" => {
            let version: u32 = rest.parse().ok()?;
            let known = (110..=460).contains(&version) && version % 10 == 0;
            known.then(|| ProfileId((FAMILY_GLSL << 16) | version))
        }
        _ => None,
    }
}

/// Shader-model style suffix: `5_0`, `6_7`, ...
fn parse_model(rest: &str) -> Option<(u32, u32)> {
    let (major, minor) = split_version(rest)?;
    ((4..=6).contains(&major) && minor <= 7).then_some((major, minor))
}

fn split_version(rest: &str) -> Option<(u32, u32)> {
    let (major, minor) = rest.split_once('_')?;
    Some((major.parse().ok()?, minor.parse().ok()?))
}

fn encode(family: u32, major: u32, minor: u32) -> ProfileId {
    ProfileId((family << 16) | (major << 8) | minor)
}
