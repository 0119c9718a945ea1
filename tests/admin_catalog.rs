mod common;

use std::collections::HashMap;

use storefront_api::{
    error::AppError,
    services::category_service::{self, CategoryForm},
    services::image_service::UploadedImage,
};
use uuid::Uuid;

fn png_upload(name: &str) -> UploadedImage {
    UploadedImage {
        file_name: name.to_string(),
        bytes: vec![0u8; 128],
    }
}

fn stored_name(image_url: &str) -> String {
    image_url.rsplit('/').next().unwrap_or_default().to_string()
}

// Slug derivation round-trip, image replacement rules, stored-file lifecycle
// and the searchable listing.
#[tokio::test]
async fn category_crud_slugs_images_and_search() -> anyhow::Result<()> {
    let Some(state) = common::setup_state().await? else {
        return Ok(());
    };

    // Create derives the slug and stores the upload.
    let form = CategoryForm {
        name: Some("New Category".into()),
        image: Some(png_upload("cover.png")),
    };
    let created = category_service::create_category(&state, form).await?;
    let created = created.data.unwrap();
    assert_eq!(created.slug, "new-category");

    let created_file = stored_name(&created.image);
    let created_path = format!("{}/categories/{}", state.config.storage_dir, created_file);
    assert!(std::fs::metadata(&created_path).is_ok(), "upload must exist");

    // Missing name and image surface as a 422 field map.
    let invalid = category_service::create_category(&state, CategoryForm::default()).await;
    match invalid {
        Err(AppError::Validation(map)) => {
            assert!(map.contains_key("name"));
            assert!(map.contains_key("image"));
        }
        other => panic!("expected validation error, got {:?}", other.map(|r| r.message)),
    }

    // A duplicate name is rejected the same way.
    let duplicate = category_service::create_category(
        &state,
        CategoryForm {
            name: Some("New Category".into()),
            image: Some(png_upload("other.png")),
        },
    )
    .await;
    assert!(matches!(duplicate, Err(AppError::Validation(_))));

    // Rename re-derives the slug and keeps the image when none is supplied.
    let updated = category_service::update_category(
        &state,
        created.id,
        CategoryForm {
            name: Some("Updated Category".into()),
            image: None,
        },
    )
    .await?;
    let updated = updated.data.unwrap();
    assert_eq!(updated.slug, "updated-category");
    assert_eq!(stored_name(&updated.image), created_file);

    // A replacement image swaps the stored file.
    let replaced = category_service::update_category(
        &state,
        created.id,
        CategoryForm {
            name: Some("Updated Category".into()),
            image: Some(png_upload("fresh.jpg")),
        },
    )
    .await?;
    let replaced = replaced.data.unwrap();
    let replaced_file = stored_name(&replaced.image);
    assert_ne!(replaced_file, created_file);
    assert!(std::fs::metadata(&created_path).is_err(), "old file removed");

    // Search is a case-insensitive substring match; a miss is an empty page.
    common::create_category(&state, "Footwear").await?;
    let hits = category_service::list_categories(&state, Some("UPDATED"), 1).await?;
    let hits = hits.data.unwrap();
    assert_eq!(hits.total, 1);
    assert_eq!(hits.data[0].name, "Updated Category");

    let misses = category_service::list_categories(&state, Some("nonexistent"), 1).await?;
    let misses = misses.data.unwrap();
    assert_eq!(misses.total, 0);
    assert!(misses.data.is_empty());

    // Delete removes the record and its stored image.
    let replaced_path = format!("{}/categories/{}", state.config.storage_dir, replaced_file);
    category_service::delete_category(&state, created.id).await?;
    assert!(std::fs::metadata(&replaced_path).is_err(), "image removed");
    let gone = category_service::get_category(&state, created.id).await;
    assert!(matches!(gone, Err(AppError::NotFound(_))));

    let missing = category_service::delete_category(&state, Uuid::new_v4()).await;
    assert!(matches!(missing, Err(AppError::NotFound(_))));

    // Oversized or wrongly-typed uploads never reach storage.
    let mut fields = HashMap::new();
    fields.insert("name".to_string(), "Another".to_string());
    let oversize = CategoryForm::from_parts(
        fields,
        Some(UploadedImage {
            file_name: "big.png".into(),
            bytes: vec![0u8; 2 * 1024 * 1024 + 1],
        }),
    );
    assert!(matches!(
        category_service::create_category(&state, oversize).await,
        Err(AppError::Validation(_))
    ));

    Ok(())
}
