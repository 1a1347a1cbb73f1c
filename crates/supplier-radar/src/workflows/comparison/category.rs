use super::domain::{CategoryLabel, MaterialShare, SupplierRecord};
use serde::{Deserialize, Serialize};

/// How multi-material fabrics are bucketed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ClassificationPolicy {
    /// A blend is filed under its dominant fiber when that fiber holds more
    /// than half of the composition, otherwise it is `composite`.
    #[default]
    MajorityShare,
    /// Any blend of two or more materials is `composite`.
    AnyBlend,
}

impl ClassificationPolicy {
    pub const fn name(self) -> &'static str {
        match self {
            Self::MajorityShare => "majority-share",
            Self::AnyBlend => "any-blend",
        }
    }

    pub fn from_name(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "majority-share" | "majority" => Some(Self::MajorityShare),
            "any-blend" | "blend" => Some(Self::AnyBlend),
            _ => None,
        }
    }
}

const MAJORITY_THRESHOLD: f64 = 0.5;

const COTTON_MARKERS: [&str; 2] = ["coton", "cotton"];
const WOOL_MARKERS: [&str; 2] = ["laine", "wool"];
const SILK_MARKERS: [&str; 2] = ["soie", "silk"];
const SYNTHETIC_MARKERS: [&str; 6] = [
    "polyester",
    "nylon",
    "acrylique",
    "acrylic",
    "viscose",
    "cupro",
];

/// Assigns each supplier to the material category it is compared within.
#[derive(Debug, Clone, Copy, Default)]
pub struct CategoryClassifier {
    policy: ClassificationPolicy,
}

impl CategoryClassifier {
    pub fn new(policy: ClassificationPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> ClassificationPolicy {
        self.policy
    }

    pub fn classify(&self, supplier: &SupplierRecord) -> CategoryLabel {
        let composition = &supplier.material_composition;
        let Some(primary) = primary_material(composition) else {
            return CategoryLabel::Other;
        };
        // A blend with no positive share or no material id carries no signal.
        if primary.share_fraction <= 0.0 || primary.material_id.trim().is_empty() {
            return CategoryLabel::Other;
        }

        if composition.len() > 1 {
            let blended = match self.policy {
                ClassificationPolicy::MajorityShare => {
                    primary.share_fraction <= MAJORITY_THRESHOLD
                }
                ClassificationPolicy::AnyBlend => true,
            };
            if blended {
                return CategoryLabel::Composite;
            }
        }

        classify_material(&primary.material_id)
    }
}

/// Entry with the largest share; the first one wins on ties.
fn primary_material(composition: &[MaterialShare]) -> Option<&MaterialShare> {
    composition.iter().fold(None, |best, candidate| match best {
        Some(current) if candidate.share_fraction <= current.share_fraction => Some(current),
        _ => Some(candidate),
    })
}

fn classify_material(material_id: &str) -> CategoryLabel {
    let id = material_id.trim().to_lowercase();
    let matches = |markers: &[&str]| markers.iter().any(|marker| id.contains(marker));

    if id.is_empty() {
        CategoryLabel::Other
    } else if matches(&COTTON_MARKERS) {
        CategoryLabel::Cotton
    } else if matches(&WOOL_MARKERS) {
        CategoryLabel::Wool
    } else if matches(&SYNTHETIC_MARKERS) {
        CategoryLabel::Synthetic
    } else if matches(&SILK_MARKERS) {
        CategoryLabel::Silk
    } else {
        CategoryLabel::from(id.as_str())
    }
}
