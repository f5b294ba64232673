//! Crop nutrient targets

use crate::models::{CropProfile, NutrientTargets};

/// Crop used when the requested crop is not in the table
pub const DEFAULT_CROP: &str = "sugarcane";

/// Target N/P/K levels (kg/ha) per supported crop
pub static CROP_PROFILES: &[CropProfile] = &[
    CropProfile {
        crop: "sugarcane",
        targets: NutrientTargets::new(150.0, 60.0, 120.0),
    },
    CropProfile {
        crop: "rice",
        targets: NutrientTargets::new(120.0, 60.0, 40.0),
    },
    CropProfile {
        crop: "wheat",
        targets: NutrientTargets::new(120.0, 60.0, 40.0),
    },
    CropProfile {
        crop: "corn",
        targets: NutrientTargets::new(150.0, 60.0, 40.0),
    },
    CropProfile {
        crop: "cotton",
        targets: NutrientTargets::new(100.0, 50.0, 50.0),
    },
    CropProfile {
        crop: "vegetables",
        targets: NutrientTargets::new(100.0, 50.0, 100.0),
    },
    CropProfile {
        crop: "potato",
        targets: NutrientTargets::new(120.0, 60.0, 150.0),
    },
    CropProfile {
        crop: "tomato",
        targets: NutrientTargets::new(150.0, 80.0, 120.0),
    },
    CropProfile {
        crop: "watermelon",
        targets: NutrientTargets::new(110.0, 60.0, 120.0),
    },
    CropProfile {
        crop: "maize",
        targets: NutrientTargets::new(150.0, 60.0, 40.0),
    },
];

/// Normalise a crop name for table lookups
pub fn normalize_crop(crop: &str) -> String {
    crop.trim().to_lowercase()
}

/// Exact (case-insensitive) lookup, `None` for unsupported crops
pub fn find_crop_profile(crop: &str) -> Option<&'static CropProfile> {
    let key = normalize_crop(crop);
    CROP_PROFILES.iter().find(|profile| profile.crop == key)
}

/// Lookup that falls back to the default crop
pub fn crop_profile(crop: &str) -> &'static CropProfile {
    find_crop_profile(crop).unwrap_or_else(default_profile)
}

fn default_profile() -> &'static CropProfile {
    // The table always contains the default crop.
    &CROP_PROFILES[0]
}

/// Names of all crops with their own nutrient targets
pub fn supported_crops() -> impl Iterator<Item = &'static str> {
    CROP_PROFILES.iter().map(|profile| profile.crop)
}
