//! Demo catalog: two medspas and ten services.

use rust_decimal::Decimal;
use sea_orm::{DatabaseConnection, EntityTrait, IntoActiveModel, PaginatorTrait, TransactionTrait};
use tracing::info;

use models::medspa;
use crate::domain::{NewMedspa, NewService};
use crate::errors::ServiceError;
use crate::repository::{MEDSPAS, SERVICES};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedOutcome {
    Seeded { medspas: usize, services: usize },
    /// Medspas already exist; nothing was written.
    Skipped,
}

// (name, description, price, minutes, index into MEDSPAS_SEED)
const SERVICES_SEED: [(&str, &str, i64, i32, usize); 10] = [
    ("Botox Treatment", "Neuromodulator treatment to reduce fine lines and wrinkles", 450, 30, 0),
    ("Juvederm Ultra XC", "Dermal filler for lip enhancement and wrinkle treatment", 750, 45, 1),
    ("VI Peel", "Medical-grade chemical peel for skin rejuvenation", 300, 60, 0),
    ("Hydrafacial", "Advanced facial treatment for deep cleansing and hydration", 200, 60, 1),
    ("Kybella", "Injectable treatment for reducing double chin", 800, 45, 0),
    ("Sculptra", "Poly-L Lactic Acid treatment for facial volume restoration", 900, 60, 1),
    ("PDO Thread Lift", "Non-surgical face lift using PDO threads", 1200, 90, 0),
    ("Vitamin B12 Injection", "Energy boosting vitamin injection", 75, 15, 1),
    ("NAD+ IV Therapy", "Intravenous therapy for cellular health and anti-aging", 350, 60, 0),
    ("Dermaplaning", "Physical exfoliation treatment for smooth, glowing skin", 150, 45, 1),
];

fn medspas_seed() -> [NewMedspa; 2] {
    [
        NewMedspa {
            name: "Serenity Wellness Spa".into(),
            address: "123 Madison Avenue, New York, NY 10016".into(),
            phone_number: "212-555-0123".into(),
            email_address: "info@serenitywellness.com".into(),
        },
        NewMedspa {
            name: "Pure Aesthetics MedSpa".into(),
            address: "456 Beverly Drive, Los Angeles, CA 90210".into(),
            phone_number: "310-555-0456".into(),
            email_address: "contact@pureaesthetics.com".into(),
        },
    ]
}

/// Insert the demo catalog into an empty database, all or nothing.
pub async fn seed_database(db: &DatabaseConnection) -> Result<SeedOutcome, ServiceError> {
    let existing = medspa::Entity::find().count(db).await?;
    if existing > 0 {
        info!(existing, "medspas present, skipping seed");
        return Ok(SeedOutcome::Skipped);
    }

    let txn = db.begin().await?;
    let mut medspa_ids = Vec::new();
    for input in medspas_seed() {
        medspa_ids.push(MEDSPAS.create(&txn, input.into_active_model()).await?.id);
    }
    for (name, description, price, duration, owner) in SERVICES_SEED {
        let input = NewService {
            medspa_id: medspa_ids[owner],
            name: name.into(),
            description: description.into(),
            price: Decimal::from(price),
            duration,
        };
        SERVICES.create(&txn, input.into_active_model()).await?;
    }
    txn.commit().await?;

    info!(medspas = medspa_ids.len(), services = SERVICES_SEED.len(), "database seeded");
    Ok(SeedOutcome::Seeded { medspas: medspa_ids.len(), services: SERVICES_SEED.len() })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog_service::list_services;
    use crate::test_support::get_db;

    #[tokio::test]
    async fn seeds_once() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        assert_eq!(seed_database(&db).await?, SeedOutcome::Seeded { medspas: 2, services: 10 });
        assert_eq!(seed_database(&db).await?, SeedOutcome::Skipped);

        let spas = MEDSPAS.list(&db, Vec::new()).await?;
        assert_eq!(spas.len(), 2);
        let serenity = list_services(&db, Some(spas[0].id)).await?;
        assert_eq!(serenity.len(), 5);
        assert_eq!(serenity[0].name, "Botox Treatment");
        assert_eq!(serenity[0].price, Decimal::from(450));
        Ok(())
    }
}
