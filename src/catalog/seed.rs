// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Demo catalog data for development deployments

use super::NewProduct;

/// Demo garments shown when the service starts with an empty catalog
pub fn demo_products() -> Vec<NewProduct> {
    let entries = [
        (
            "Navy Business Suit",
            "Suit",
            "https://encrypted-tbn2.gstatic.com/images?q=tbn:ANd9GcTCTVhGtN1IBcBw-5rZQsUp_5xVTG2mMj_0wF4vHe-lN55FXk4M",
        ),
        (
            "Floral Sundress",
            "Dress",
            "https://encrypted-tbn1.gstatic.com/images?q=tbn:ANd9GcQSToyOZL0lm55_HOX8bfD4GDP2lTOtPuCkgic0mfR6ow3sihcR",
        ),
        (
            "Plaid Flannel Shirt",
            "Shirt",
            "https://encrypted-tbn1.gstatic.com/images?q=tbn:ANd9GcTNwa1VYTRdCQj8yU_BUUEp53aGpkj4Pe7f9E0RmyB4K0WLsr0x",
        ),
        (
            "Beige Summer Dress",
            "Dress",
            "https://encrypted-tbn0.gstatic.com/images?q=tbn:ANd9GcR6C0xOtO13DFeJvTMQ8FPkx1mArE43bTJYs4v2RSeHoAOPaSfSK9ANxtXPbxAlsyZEuKw&usqp=CAU",
        ),
        (
            "Denim Jacket",
            "Jacket",
            "https://assets.digitalcontent.marksandspencer.app/image/upload/w_1008,h_1319,q_auto,f_auto,e_sharpen/SD_03_T16_6466M_E2_X_EC_94",
        ),
    ];

    entries
        .into_iter()
        .map(|(name, category, image)| NewProduct {
            name: name.to_string(),
            category: category.to_string(),
            image: image.to_string(),
            stock: Some(10),
        })
        .collect()
}
