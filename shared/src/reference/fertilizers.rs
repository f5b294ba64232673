//! Fertilizer catalog grouped by crop

use super::crops::{normalize_crop, DEFAULT_CROP};
use crate::models::{ChemicalClass as C, FertilizerCandidate};

// ============================================================================
// Products
// ============================================================================

pub const UREA: FertilizerCandidate = FertilizerCandidate {
    name: "Urea",
    npk_ratio: "46:0:0",
    nitrogen: 46.0,
    phosphorus: 0.0,
    potassium: 0.0,
    dosage: "100-130 kg/acre in 2-3 split doses",
    application_method: "Split application: broadcast at tillering and again before flowering",
    benefits: &[
        "Highest nitrogen content of any solid fertilizer",
        "Promotes rapid vegetative growth",
        "Low cost per kg of nitrogen",
    ],
    classes: &[C::Urea],
};

pub const NEEM_COATED_UREA: FertilizerCandidate = FertilizerCandidate {
    name: "Neem Coated Urea",
    npk_ratio: "46:0:0",
    nitrogen: 46.0,
    phosphorus: 0.0,
    potassium: 0.0,
    dosage: "90-120 kg/acre in 2 split doses",
    application_method: "Broadcast and incorporate into moist soil",
    benefits: &[
        "Slower nitrogen release than plain urea",
        "Reduces leaching and volatilization losses",
        "Mild pest-repellent effect from neem oil",
    ],
    classes: &[C::Urea],
};

pub const DAP: FertilizerCandidate = FertilizerCandidate {
    name: "Diammonium Phosphate (DAP)",
    npk_ratio: "18:46:0",
    nitrogen: 18.0,
    phosphorus: 46.0,
    potassium: 0.0,
    dosage: "50-60 kg/acre as basal dose",
    application_method: "Basal application: place below the seed at sowing",
    benefits: &[
        "Strong phosphorus supply for root development",
        "Supplies starter nitrogen",
        "Improves early crop establishment",
    ],
    classes: &[C::Ammonium, C::Phosphate],
};

pub const MAP: FertilizerCandidate = FertilizerCandidate {
    name: "Monoammonium Phosphate (MAP)",
    npk_ratio: "12:61:0",
    nitrogen: 12.0,
    phosphorus: 61.0,
    potassium: 0.0,
    dosage: "5-7 kg/acre per fertigation cycle",
    application_method: "Fertigation through drip or as a starter band",
    benefits: &[
        "Fully water soluble phosphorus",
        "Suited to drip irrigation",
        "Less alkaline than DAP near the seed",
    ],
    classes: &[C::Ammonium, C::Phosphate],
};

pub const MOP: FertilizerCandidate = FertilizerCandidate {
    name: "Muriate of Potash (MOP)",
    npk_ratio: "0:0:60",
    nitrogen: 0.0,
    phosphorus: 0.0,
    potassium: 60.0,
    dosage: "30-40 kg/acre",
    application_method: "Basal application mixed into the seedbed",
    benefits: &[
        "Improves drought and disease tolerance",
        "Strengthens stems against lodging",
        "Raises sugar and starch content",
    ],
    classes: &[C::Potassium],
};

pub const SOP: FertilizerCandidate = FertilizerCandidate {
    name: "Potassium Sulfate (SOP)",
    npk_ratio: "0:0:50",
    nitrogen: 0.0,
    phosphorus: 0.0,
    potassium: 50.0,
    dosage: "25-40 kg/acre",
    application_method: "Side dressing or foliar spray at 1%",
    benefits: &[
        "Chloride-free potassium for sensitive crops",
        "Supplies sulfur",
        "Improves tuber and fruit quality",
    ],
    classes: &[C::Potassium, C::Sulfate],
};

pub const SSP: FertilizerCandidate = FertilizerCandidate {
    name: "Single Super Phosphate (SSP)",
    npk_ratio: "0:16:0",
    nitrogen: 0.0,
    phosphorus: 16.0,
    potassium: 0.0,
    dosage: "150-200 kg/acre as basal dose",
    application_method: "Basal application: broadcast before final ploughing",
    benefits: &[
        "Supplies calcium and sulfur with phosphorus",
        "Good choice for oilseeds and pulses in rotation",
        "Low cost phosphorus source",
    ],
    classes: &[C::Phosphate, C::Calcium, C::Sulfate],
};

pub const AMMONIUM_SULFATE: FertilizerCandidate = FertilizerCandidate {
    name: "Ammonium Sulfate",
    npk_ratio: "21:0:0",
    nitrogen: 21.0,
    phosphorus: 0.0,
    potassium: 0.0,
    dosage: "100-150 kg/acre in split doses",
    application_method: "Top dressing in standing water or moist soil",
    benefits: &[
        "Supplies nitrogen and sulfur",
        "Lowers pH of alkaline soils",
        "Low volatilization loss",
    ],
    classes: &[C::Ammonium, C::Sulfate],
};

pub const AMMONIUM_PHOSPHATE_SULFATE: FertilizerCandidate = FertilizerCandidate {
    name: "Ammonium Phosphate Sulfate",
    npk_ratio: "20:20:0:13",
    nitrogen: 20.0,
    phosphorus: 20.0,
    potassium: 0.0,
    dosage: "75-100 kg/acre as basal dose",
    application_method: "Basal application at transplanting or sowing",
    benefits: &[
        "Balanced nitrogen and phosphorus",
        "Contains 13% sulfur",
        "Suits sulfur-deficient soils",
    ],
    classes: &[C::Ammonium, C::Phosphate, C::Sulfate],
};

pub const CAN: FertilizerCandidate = FertilizerCandidate {
    name: "Calcium Ammonium Nitrate (CAN)",
    npk_ratio: "26:0:0",
    nitrogen: 26.0,
    phosphorus: 0.0,
    potassium: 0.0,
    dosage: "80-100 kg/acre in split doses",
    application_method: "Top dressing between rows",
    benefits: &[
        "Immediate and sustained nitrogen release",
        "Neutral effect on soil pH",
        "Supplies calcium",
    ],
    classes: &[C::Calcium, C::Ammonium, C::Nitrate],
};

pub const CALCIUM_NITRATE: FertilizerCandidate = FertilizerCandidate {
    name: "Calcium Nitrate",
    npk_ratio: "15.5:0:0",
    nitrogen: 15.5,
    phosphorus: 0.0,
    potassium: 0.0,
    dosage: "10-15 kg/acre per week through drip",
    application_method: "Fertigation or foliar spray",
    benefits: &[
        "Prevents blossom end rot",
        "Readily available nitrate nitrogen",
        "Improves fruit firmness and shelf life",
    ],
    classes: &[C::Calcium, C::Nitrate],
};

pub const POTASSIUM_NITRATE: FertilizerCandidate = FertilizerCandidate {
    name: "Potassium Nitrate",
    npk_ratio: "13:0:45",
    nitrogen: 13.0,
    phosphorus: 0.0,
    potassium: 45.0,
    dosage: "5-10 kg/acre per spray or fertigation",
    application_method: "Foliar spray at 1-2% during flowering and boll development",
    benefits: &[
        "Supplies nitrogen and potassium together",
        "Improves boll and fruit development",
        "Chloride free",
    ],
    classes: &[C::Potassium, C::Nitrate],
};

pub const MKP: FertilizerCandidate = FertilizerCandidate {
    name: "Monopotassium Phosphate (MKP)",
    npk_ratio: "0:52:34",
    nitrogen: 0.0,
    phosphorus: 52.0,
    potassium: 34.0,
    dosage: "3-5 kg/acre per fertigation cycle",
    application_method: "Fertigation or foliar spray at flowering",
    benefits: &[
        "Boosts flowering and fruit set",
        "Nitrogen free for late-season feeding",
        "Fully water soluble",
    ],
    classes: &[C::Potassium, C::Phosphate],
};

pub const NPK_10_26_26: FertilizerCandidate = FertilizerCandidate {
    name: "NPK Complex 10:26:26",
    npk_ratio: "10:26:26",
    nitrogen: 10.0,
    phosphorus: 26.0,
    potassium: 26.0,
    dosage: "50-75 kg/acre as basal dose",
    application_method: "Basal application in furrows at sowing",
    benefits: &[
        "High phosphorus and potassium in one product",
        "Supports cob and grain filling",
        "Single-pass basal dose",
    ],
    classes: &[C::Ammonium, C::Phosphate, C::Potassium],
};

pub const NPK_12_32_16: FertilizerCandidate = FertilizerCandidate {
    name: "NPK Complex 12:32:16",
    npk_ratio: "12:32:16",
    nitrogen: 12.0,
    phosphorus: 32.0,
    potassium: 16.0,
    dosage: "75-100 kg/acre as basal dose",
    application_method: "Basal application at planting",
    benefits: &[
        "Balanced starter nutrition",
        "Strong root and tuber initiation",
        "Reduces number of separate applications",
    ],
    classes: &[C::Ammonium, C::Phosphate, C::Potassium],
};

pub const NPK_19_19_19: FertilizerCandidate = FertilizerCandidate {
    name: "Water Soluble NPK 19:19:19",
    npk_ratio: "19:19:19",
    nitrogen: 19.0,
    phosphorus: 19.0,
    potassium: 19.0,
    dosage: "3-5 kg/acre per fertigation or 0.5% foliar spray",
    application_method: "Fertigation or foliar spray during vegetative growth",
    benefits: &[
        "Equal parts of all three macronutrients",
        "Fully water soluble",
        "Quick correction of general deficiency",
    ],
    classes: &[C::Ammonium, C::Nitrate, C::Phosphate, C::Potassium],
};

pub const ZINC_SULFATE: FertilizerCandidate = FertilizerCandidate {
    name: "Zinc Sulfate Monohydrate",
    npk_ratio: "0:0:0 (33% Zn)",
    nitrogen: 0.0,
    phosphorus: 0.0,
    potassium: 0.0,
    dosage: "10 kg/acre once every 2-3 seasons",
    application_method: "Broadcast before puddling or transplanting",
    benefits: &[
        "Corrects zinc deficiency (khaira disease in rice)",
        "Improves tillering",
        "Supplies sulfur",
    ],
    classes: &[C::Sulfate],
};

pub const MAGNESIUM_SULFATE: FertilizerCandidate = FertilizerCandidate {
    name: "Magnesium Sulfate",
    npk_ratio: "0:0:0 (9.6% Mg)",
    nitrogen: 0.0,
    phosphorus: 0.0,
    potassium: 0.0,
    dosage: "1% foliar spray, 2-3 times",
    application_method: "Foliar spray at flowering and fruiting",
    benefits: &[
        "Corrects leaf reddening from magnesium deficiency",
        "Supports chlorophyll formation",
        "Supplies sulfur",
    ],
    classes: &[C::Sulfate],
};

pub const GYPSUM: FertilizerCandidate = FertilizerCandidate {
    name: "Gypsum (Calcium Sulfate)",
    npk_ratio: "0:0:0 (23% Ca, 18% S)",
    nitrogen: 0.0,
    phosphorus: 0.0,
    potassium: 0.0,
    dosage: "100-200 kg/acre",
    application_method: "Broadcast before sowing and incorporate",
    benefits: &[
        "Reclaims sodic soils",
        "Improves soil structure and water infiltration",
        "Supplies calcium and sulfur",
    ],
    classes: &[C::Calcium, C::Sulfate],
};

pub const PRESS_MUD_COMPOST: FertilizerCandidate = FertilizerCandidate {
    name: "Press Mud Organic Compost",
    npk_ratio: "1.5:2:1",
    nitrogen: 1.5,
    phosphorus: 2.0,
    potassium: 1.0,
    dosage: "2-4 tonnes/acre",
    application_method: "Broadcast and incorporate before planting",
    benefits: &[
        "Recycles sugar mill by-product",
        "Raises soil organic matter",
        "Improves moisture retention",
    ],
    classes: &[C::Organic, C::Calcium],
};

pub const VERMICOMPOST: FertilizerCandidate = FertilizerCandidate {
    name: "Vermicompost (Organic)",
    npk_ratio: "1.5:1:1.5",
    nitrogen: 1.5,
    phosphorus: 1.0,
    potassium: 1.5,
    dosage: "1-2 tonnes/acre",
    application_method: "Mix into beds or pits before transplanting",
    benefits: &[
        "Improves soil structure and microbial life",
        "Slow, steady nutrient release",
        "Raises water holding capacity",
    ],
    classes: &[C::Organic],
};

pub const FARMYARD_MANURE: FertilizerCandidate = FertilizerCandidate {
    name: "Farmyard Manure (Organic)",
    npk_ratio: "0.5:0.2:0.5",
    nitrogen: 0.5,
    phosphorus: 0.2,
    potassium: 0.5,
    dosage: "4-5 tonnes/acre",
    application_method: "Broadcast 2-3 weeks before sowing and plough in",
    benefits: &[
        "Builds long-term soil fertility",
        "Improves soil tilth",
        "Supplies micronutrients",
    ],
    classes: &[C::Organic],
};

pub const BONE_MEAL: FertilizerCandidate = FertilizerCandidate {
    name: "Bone Meal (Organic)",
    npk_ratio: "3:15:0",
    nitrogen: 3.0,
    phosphorus: 15.0,
    potassium: 0.0,
    dosage: "100-200 kg/acre",
    application_method: "Mix into planting beds",
    benefits: &[
        "Slow-release organic phosphorus",
        "Supplies calcium",
        "Supports root and flower development",
    ],
    classes: &[C::Organic, C::Phosphate, C::Calcium],
};

// ============================================================================
// Crop Lists
// ============================================================================

const SUGARCANE: &[FertilizerCandidate] = &[
    UREA,
    DAP,
    MOP,
    SSP,
    AMMONIUM_SULFATE,
    NPK_12_32_16,
    PRESS_MUD_COMPOST,
    NEEM_COATED_UREA,
];

const RICE: &[FertilizerCandidate] = &[
    UREA,
    DAP,
    MOP,
    AMMONIUM_SULFATE,
    AMMONIUM_PHOSPHATE_SULFATE,
    ZINC_SULFATE,
    SSP,
];

const WHEAT: &[FertilizerCandidate] = &[UREA, DAP, MOP, NPK_12_32_16, CAN, SSP, GYPSUM];

const CORN: &[FertilizerCandidate] = &[
    UREA,
    DAP,
    MOP,
    NPK_10_26_26,
    AMMONIUM_SULFATE,
    ZINC_SULFATE,
    CAN,
];

const COTTON: &[FertilizerCandidate] = &[
    UREA,
    DAP,
    MOP,
    POTASSIUM_NITRATE,
    AMMONIUM_PHOSPHATE_SULFATE,
    MAGNESIUM_SULFATE,
    FARMYARD_MANURE,
];

const VEGETABLES: &[FertilizerCandidate] = &[
    NPK_19_19_19,
    CALCIUM_NITRATE,
    VERMICOMPOST,
    MAP,
    SOP,
    UREA,
    BONE_MEAL,
];

const POTATO: &[FertilizerCandidate] = &[
    NPK_12_32_16,
    SOP,
    MOP,
    UREA,
    AMMONIUM_SULFATE,
    CALCIUM_NITRATE,
    DAP,
];

const TOMATO: &[FertilizerCandidate] = &[
    NPK_19_19_19,
    CALCIUM_NITRATE,
    POTASSIUM_NITRATE,
    MKP,
    UREA,
    VERMICOMPOST,
    MAGNESIUM_SULFATE,
];

/// Crops with a dedicated product list. Everything else uses the default crop's list.
pub static FERTILIZER_CATALOG: &[(&str, &[FertilizerCandidate])] = &[
    ("sugarcane", SUGARCANE),
    ("rice", RICE),
    ("wheat", WHEAT),
    ("corn", CORN),
    ("cotton", COTTON),
    ("vegetables", VEGETABLES),
    ("potato", POTATO),
    ("tomato", TOMATO),
];

/// Whether the crop has its own product list
pub fn has_dedicated_list(crop: &str) -> bool {
    let key = normalize_crop(crop);
    FERTILIZER_CATALOG.iter().any(|(name, _)| *name == key)
}

/// Candidate products for a crop, falling back to the default crop's list
pub fn fertilizers_for(crop: &str) -> &'static [FertilizerCandidate] {
    let key = normalize_crop(crop);
    FERTILIZER_CATALOG
        .iter()
        .find(|(name, _)| *name == key)
        .or_else(|| FERTILIZER_CATALOG.iter().find(|(name, _)| *name == DEFAULT_CROP))
        .map(|(_, list)| *list)
        .unwrap_or(&[])
}
