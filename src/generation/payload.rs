// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Prompt and payload construction for the generation backend
//!
//! Pure, deterministic transformation: same inputs always yield the
//! same payload shape.

use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde_json::{json, Value};

use crate::imaging::ImageAsset;

/// Fixed instruction block addressed to the generation backend.
///
/// Image 1 is the person, image 2 is the garment. The backend must
/// replace the clothing while preserving identity and background, and
/// is explicitly forbidden from returning image 1 unmodified.
fn instruction_text(product_label: &str) -> String {
    format!(
        "TASK: EDIT IMAGE 1 (PERSON) BY WEARING THE CLOTHING FROM IMAGE 2 (GARMENT).\n\
         IMAGE 1 DESCRIPTION: A photo of a person.\n\
         IMAGE 2 DESCRIPTION: {label}.\n\
         \n\
         INSTRUCTIONS:\n\
         1. Identify the person in IMAGE 1.\n\
         2. Replace their current clothes with the {label} shown in IMAGE 2.\n\
         3. The {label} must be naturally draped over the person's body, matching their pose and proportions.\n\
         4. ABSOLUTELY PRESERVE the person's face, hair, skin tone, and body shape from IMAGE 1.\n\
         5. ABSOLUTELY PRESERVE the entire background and environment from IMAGE 1.\n\
         6. The final output must be a single image of the person from IMAGE 1 wearing the {label}.\n\
         \n\
         IMPORTANT: DO NOT return the original image 1. You MUST modify the clothing.",
        label = product_label
    )
}

fn inline_part(asset: &ImageAsset) -> Value {
    json!({
        "inline_data": {
            "mime_type": asset.media_type,
            "data": STANDARD.encode(&asset.bytes),
        }
    })
}

/// Build the combined request body: two inline images, the instruction
/// text, and an image-only output-modality directive.
pub fn build_payload(user: &ImageAsset, garment: &ImageAsset, product_label: &str) -> Value {
    json!({
        "contents": [{
            "parts": [
                inline_part(user),
                inline_part(garment),
                { "text": instruction_text(product_label) },
            ]
        }],
        "generationConfig": {
            "responseModalities": ["IMAGE"]
        }
    })
}
