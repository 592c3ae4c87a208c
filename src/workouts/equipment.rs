// ABOUTME: Static catalog of home equipment users can pick for equipped workouts
// ABOUTME: Items are referenced by id in generation requests and rendered as labels in the prompt
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::limits::MAX_HOME_EQUIPMENT_ITEMS;
use crate::errors::{AppError, AppResult};
use serde::Serialize;
use serde_json::json;

/// One piece of home equipment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EquipmentItem {
    /// Stable id sent by clients
    pub id: &'static str,
    /// Display name
    pub name: &'static str,
    /// Owning category id
    pub category: &'static str,
    /// Weight, for weights
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<&'static str>,
    /// Resistance level, for bands
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resistance: Option<&'static str>,
    /// Band color
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<&'static str>,
}

impl EquipmentItem {
    const fn plain(id: &'static str, name: &'static str, category: &'static str) -> Self {
        Self {
            id,
            name,
            category,
            weight: None,
            resistance: None,
            color: None,
        }
    }

    const fn weighted(id: &'static str, name: &'static str, weight: &'static str) -> Self {
        Self {
            id,
            name,
            category: "weights",
            weight: Some(weight),
            resistance: None,
            color: None,
        }
    }

    const fn band(
        id: &'static str,
        name: &'static str,
        resistance: &'static str,
        color: &'static str,
    ) -> Self {
        Self {
            id,
            name,
            category: "resistance-bands",
            weight: None,
            resistance: Some(resistance),
            color: Some(color),
        }
    }

    /// Human-readable label used in prompts, e.g. `Dumbbell 4kg` or `Elastika Srednja (Rdeča)`
    #[must_use]
    pub fn label(&self) -> String {
        match (self.weight, self.resistance, self.color) {
            (Some(weight), _, _) => format!("{} {weight}", self.name),
            (None, Some(resistance), Some(color)) => {
                format!("{} {resistance} ({color})", self.name)
            }
            (None, Some(resistance), None) => format!("{} {resistance}", self.name),
            _ => self.name.to_owned(),
        }
    }
}

/// A group of equipment items
#[derive(Debug, Clone, Copy, Serialize)]
pub struct EquipmentCategory {
    /// Category id
    pub id: &'static str,
    /// Display name
    pub name: &'static str,
    /// Short description shown in the picker
    pub description: &'static str,
    /// Items in this category
    pub items: &'static [EquipmentItem],
}

const WEIGHTS: &[EquipmentItem] = &[
    EquipmentItem::weighted("dumbbell-2kg", "Dumbbell", "2kg"),
    EquipmentItem::weighted("dumbbell-4kg", "Dumbbell", "4kg"),
    EquipmentItem::weighted("dumbbell-6kg", "Dumbbell", "6kg"),
    EquipmentItem::weighted("dumbbell-8kg", "Dumbbell", "8kg"),
    EquipmentItem::weighted("dumbbell-10kg", "Dumbbell", "10kg"),
    EquipmentItem::weighted("dumbbell-12kg", "Dumbbell", "12kg"),
    EquipmentItem::weighted("dumbbell-15kg", "Dumbbell", "15kg"),
    EquipmentItem::weighted("dumbbell-20kg", "Dumbbell", "20kg"),
    EquipmentItem::weighted("kettlebell-8kg", "Kettlebell", "8kg"),
    EquipmentItem::weighted("kettlebell-12kg", "Kettlebell", "12kg"),
    EquipmentItem::weighted("kettlebell-16kg", "Kettlebell", "16kg"),
    EquipmentItem::weighted("kettlebell-20kg", "Kettlebell", "20kg"),
    EquipmentItem::weighted("kettlebell-24kg", "Kettlebell", "24kg"),
    EquipmentItem::weighted("barbell", "Barbell", "20kg"),
    EquipmentItem::weighted("plates-1kg", "Plates", "1kg"),
    EquipmentItem::weighted("plates-2kg", "Plates", "2kg"),
    EquipmentItem::weighted("plates-5kg", "Plates", "5kg"),
    EquipmentItem::weighted("plates-10kg", "Plates", "10kg"),
    EquipmentItem::weighted("plates-15kg", "Plates", "15kg"),
    EquipmentItem::weighted("plates-20kg", "Plates", "20kg"),
];

const RESISTANCE_BANDS: &[EquipmentItem] = &[
    EquipmentItem::band("band-light", "Elastika", "Lahka", "Rumena"),
    EquipmentItem::band("band-medium", "Elastika", "Srednja", "Rdeča"),
    EquipmentItem::band("band-heavy", "Elastika", "Težka", "Modra"),
    EquipmentItem::band("band-extra-heavy", "Elastika", "Zelo težka", "Črna"),
    EquipmentItem::band("band-mini", "Mini elastika", "Mini", "Zelena"),
    EquipmentItem::band("band-loop", "Loop elastika", "Loop", "Oranžna"),
];

const CARDIO: &[EquipmentItem] = &[
    EquipmentItem::plain("jump-rope", "Skočna vrv", "cardio"),
    EquipmentItem::plain("treadmill", "Tekača", "cardio"),
    EquipmentItem::plain("exercise-bike", "Kolo", "cardio"),
    EquipmentItem::plain("rowing-machine", "Veslač", "cardio"),
    EquipmentItem::plain("elliptical", "Eliptični", "cardio"),
    EquipmentItem::plain("stepper", "Stepper", "cardio"),
];

const YOGA: &[EquipmentItem] = &[
    EquipmentItem::plain("yoga-mat", "Joga preproga", "yoga"),
    EquipmentItem::plain("yoga-block", "Joga blok", "yoga"),
    EquipmentItem::plain("yoga-strap", "Joga trak", "yoga"),
    EquipmentItem::plain("yoga-bolster", "Joga blazina", "yoga"),
    EquipmentItem::plain("yoga-wheel", "Joga kolo", "yoga"),
    EquipmentItem::plain("yoga-towel", "Joga brisača", "yoga"),
];

const STABILITY: &[EquipmentItem] = &[
    EquipmentItem::plain("balance-board", "Ravnotežna deska", "stability"),
    EquipmentItem::plain("bosu-ball", "BOSU žoga", "stability"),
    EquipmentItem::plain("stability-ball", "Stabilnostna žoga", "stability"),
    EquipmentItem::plain("foam-roller", "Penasti valj", "stability"),
    EquipmentItem::plain("balance-cushion", "Ravnotežna blazina", "stability"),
    EquipmentItem::plain("wobble-board", "Nestabilna deska", "stability"),
];

const MOBILITY: &[EquipmentItem] = &[
    EquipmentItem::plain("lacrosse-ball", "Lacrosse žoga", "mobility"),
    EquipmentItem::plain("massage-ball", "Masažna žoga", "mobility"),
    EquipmentItem::plain("mobility-stick", "Mobilnostna palica", "mobility"),
    EquipmentItem::plain("stretching-strap", "Raztezni trak", "mobility"),
    EquipmentItem::plain("mobility-band", "Mobilnostna elastika", "mobility"),
    EquipmentItem::plain("trigger-point-tool", "Trigger point orodje", "mobility"),
];

const PLYOMETRICS: &[EquipmentItem] = &[
    EquipmentItem::plain("plyo-box", "Pliometrijska skrinja", "plyometrics"),
    EquipmentItem::plain("agility-ladder", "Agilnostna lestev", "plyometrics"),
    EquipmentItem::plain("hurdles", "Prepreke", "plyometrics"),
    EquipmentItem::plain("speed-cones", "Hitrostni stožci", "plyometrics"),
    EquipmentItem::plain("jump-pad", "Skočna blazina", "plyometrics"),
    EquipmentItem::plain("reaction-ball", "Reakcijska žoga", "plyometrics"),
];

const RECOVERY: &[EquipmentItem] = &[
    EquipmentItem::plain("ice-pack", "Led paket", "recovery"),
    EquipmentItem::plain("heating-pad", "Grelna blazina", "recovery"),
    EquipmentItem::plain("compression-sleeve", "Kompresijski rokav", "recovery"),
    EquipmentItem::plain("massage-gun", "Masažna pištola", "recovery"),
    EquipmentItem::plain("cupping-set", "Set za kupanje", "recovery"),
    EquipmentItem::plain("tens-unit", "TENS enota", "recovery"),
];

const MEASUREMENT: &[EquipmentItem] = &[
    EquipmentItem::plain("body-fat-caliper", "Kaliper za maščobe", "measurement"),
    EquipmentItem::plain("measuring-tape", "Merilni trak", "measurement"),
    EquipmentItem::plain("body-scale", "Telesna tehtnica", "measurement"),
    EquipmentItem::plain("heart-rate-monitor", "Merilec srčnega utripa", "measurement"),
    EquipmentItem::plain("fitness-tracker", "Fitness tracker", "measurement"),
    EquipmentItem::plain("blood-pressure-monitor", "Merilec krvnega tlaka", "measurement"),
];

const ACCESSORIES: &[EquipmentItem] = &[
    EquipmentItem::plain("gym-gloves", "Gimnastične rokavice", "accessories"),
    EquipmentItem::plain("wrist-wraps", "Zapestne ovitke", "accessories"),
    EquipmentItem::plain("lifting-belt", "Dvigovalni pas", "accessories"),
    EquipmentItem::plain("knee-sleeves", "Kolenski rokavi", "accessories"),
    EquipmentItem::plain("ankle-weights", "Gležnjske uteži", "accessories"),
    EquipmentItem::plain("weight-vest", "Utežni jopič", "accessories"),
];

const CATALOG: &[EquipmentCategory] = &[
    EquipmentCategory {
        id: "weights",
        name: "Uteži",
        description: "Dodajte uteži, ki jih imate doma",
        items: WEIGHTS,
    },
    EquipmentCategory {
        id: "resistance-bands",
        name: "Elastike",
        description: "Dodajte elastike z različnimi odpornostmi",
        items: RESISTANCE_BANDS,
    },
    EquipmentCategory {
        id: "cardio",
        name: "Kardio oprema",
        description: "Dodajte kardio opremo",
        items: CARDIO,
    },
    EquipmentCategory {
        id: "yoga",
        name: "Joga oprema",
        description: "Dodajte jogo opremo",
        items: YOGA,
    },
    EquipmentCategory {
        id: "stability",
        name: "Stabilnost",
        description: "Dodajte opremo za stabilnost",
        items: STABILITY,
    },
    EquipmentCategory {
        id: "mobility",
        name: "Mobilnost",
        description: "Dodajte opremo za mobilnost",
        items: MOBILITY,
    },
    EquipmentCategory {
        id: "plyometrics",
        name: "Pliometrija",
        description: "Dodajte opremo za pliometrijo",
        items: PLYOMETRICS,
    },
    EquipmentCategory {
        id: "recovery",
        name: "Obnovitev",
        description: "Dodajte opremo za obnovitev",
        items: RECOVERY,
    },
    EquipmentCategory {
        id: "measurement",
        name: "Merjenje",
        description: "Dodajte opremo za merjenje",
        items: MEASUREMENT,
    },
    EquipmentCategory {
        id: "accessories",
        name: "Dodatki",
        description: "Dodajte različne dodatke",
        items: ACCESSORIES,
    },
];

/// The full equipment catalog
#[must_use]
pub const fn catalog() -> &'static [EquipmentCategory] {
    CATALOG
}

/// Look up one item by id
#[must_use]
pub fn find_item(id: &str) -> Option<&'static EquipmentItem> {
    CATALOG
        .iter()
        .flat_map(|category| category.items.iter())
        .find(|item| item.id == id)
}

/// Resolve requested ids to catalog items, preserving request order and dropping duplicates
///
/// # Errors
///
/// Returns `InvalidInput` listing every unknown id, or when too many ids are sent
pub fn resolve_equipment(ids: &[String]) -> AppResult<Vec<&'static EquipmentItem>> {
    if ids.len() > MAX_HOME_EQUIPMENT_ITEMS {
        return Err(AppError::invalid_input(format!(
            "At most {MAX_HOME_EQUIPMENT_ITEMS} home equipment items may be selected"
        )));
    }

    let mut resolved: Vec<&'static EquipmentItem> = Vec::with_capacity(ids.len());
    let mut unknown = Vec::new();
    for id in ids {
        match find_item(id.trim()) {
            Some(item) if !resolved.iter().any(|known| known.id == item.id) => resolved.push(item),
            Some(_) => {}
            None => unknown.push(id.clone()),
        }
    }

    if unknown.is_empty() {
        Ok(resolved)
    } else {
        Err(AppError::invalid_input("Unknown home equipment id")
            .with_details(json!({ "unknown": unknown })))
    }
}
