use contracts::domain::a008_cheque::ChequeStatus;
use contracts::domain::{CompanyGraph, MachineWithJobs, ParcelWithPlantings, PlantingWithHarvests};
use sea_orm::DatabaseConnection;

use super::repository;
use crate::domain::{
    a002_parcel, a003_planting, a004_harvest, a005_machine, a006_machine_job, a007_product,
    a008_cheque,
};

/// Returned when the store holds no company record at all.
pub const NO_COMPANY_FALLBACK: &str = "No hay datos de empresa disponibles.";

/// Returned when any part of the read fails; the chat proceeds with this
/// degraded context instead of failing the request.
pub const ERROR_FALLBACK: &str = "Error al obtener datos de la empresa.";

/// One broad read: the first company and its full nested graph. No
/// pagination; a single company's operational records fit in memory.
pub async fn load_graph(db: &DatabaseConnection) -> anyhow::Result<Option<CompanyGraph>> {
    let Some(company) = repository::find_first(db).await? else {
        return Ok(None);
    };

    let mut parcels = Vec::new();
    for parcel in a002_parcel::repository::list_by_company(db, company.id).await? {
        let mut plantings = Vec::new();
        for planting in a003_planting::repository::list_by_parcel(db, parcel.id).await? {
            let harvests = a004_harvest::repository::list_by_planting(db, planting.id).await?;
            plantings.push(PlantingWithHarvests { planting, harvests });
        }
        parcels.push(ParcelWithPlantings { parcel, plantings });
    }

    let mut machines = Vec::new();
    for machine in a005_machine::repository::list_by_company(db, company.id).await? {
        let jobs = a006_machine_job::repository::list_by_machine(db, machine.id).await?;
        machines.push(MachineWithJobs { machine, jobs });
    }

    let products = a007_product::repository::list_by_company(db, company.id).await?;
    let cheques = a008_cheque::repository::list_by_company(db, company.id).await?;

    Ok(Some(CompanyGraph {
        company,
        parcels,
        machines,
        products,
        cheques,
    }))
}

/// Reduce the loaded graph to the report injected into the LLM prompt.
/// Pure fold over in-memory collections; tonnes rounded to whole units,
/// average TCH to one decimal (0 when there are no harvest records).
pub fn build_report(graph: &CompanyGraph) -> String {
    let total_tonnes: f64 = graph.harvests().map(|h| h.tonnes).sum();
    let harvest_count = graph.harvests().count();
    let avg_tch = if harvest_count > 0 {
        graph.harvests().map(|h| h.tch.unwrap_or(0.0)).sum::<f64>() / harvest_count as f64
    } else {
        0.0
    };

    let job_count: usize = graph.machines.iter().map(|m| m.jobs.len()).sum();
    let worked_hectares: f64 = graph
        .machines
        .iter()
        .flat_map(|m| m.jobs.iter())
        .map(|j| j.hectares)
        .sum();

    let pending: Vec<_> = graph
        .cheques
        .iter()
        .filter(|c| c.status == ChequeStatus::Pendiente)
        .collect();
    let pending_amount: f64 = pending.iter().map(|c| c.amount).sum();

    format!(
        "INFORMACIÓN DE LA EMPRESA:\n\
         - Nombre: {}\n\
         - CUIT: {}\n\
         - Ubicación: {}\n\
         \n\
         RESUMEN PRODUCTIVO:\n\
         - Total lotes: {}\n\
         - Producción total: {:.0} t\n\
         - TCH promedio: {:.1}\n\
         \n\
         MAQUINARIA:\n\
         - Máquinas: {}\n\
         - Trabajos registrados: {}\n\
         - Hectáreas trabajadas: {:.0} ha\n\
         \n\
         INSUMOS Y FINANZAS:\n\
         - Productos en stock: {}\n\
         - Cheques en cartera: {}\n\
         - Monto pendiente de cobro: ${:.2}\n",
        graph.company.name,
        graph.company.cuit,
        graph.company.address,
        graph.parcels.len(),
        total_tonnes,
        avg_tch,
        graph.machines.len(),
        job_count,
        worked_hectares,
        graph.products.len(),
        pending.len(),
        pending_amount,
    )
}

async fn context_inner(db: &DatabaseConnection) -> anyhow::Result<String> {
    let Some(graph) = load_graph(db).await? else {
        tracing::warn!("No company record found in the store");
        return Ok(NO_COMPANY_FALLBACK.to_string());
    };

    // Table-wide count next to the graph-based one in the report.
    let total_parcels = a002_parcel::repository::count_all(db).await?;
    tracing::debug!("Total parcels in store: {}", total_parcels);

    Ok(build_report(&graph))
}

/// Contextual grounding for the chat prompt. Never fails: any error during
/// the read is logged and replaced with the fixed fallback sentence.
pub async fn company_context(db: &DatabaseConnection) -> String {
    match context_inner(db).await {
        Ok(text) => text,
        Err(e) => {
            tracing::error!("Failed to build company context: {}", e);
            ERROR_FALLBACK.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use contracts::domain::{Cheque, Company, Harvest, Machine, MachineJob, Parcel, Planting};
    use sea_orm::{ActiveModelTrait, Database, Set};
    use uuid::Uuid;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn fixture_graph() -> CompanyGraph {
        let company_id = Uuid::new_v4();
        let parcel_a = Uuid::new_v4();
        let parcel_b = Uuid::new_v4();
        let planting_a = Uuid::new_v4();
        let planting_b = Uuid::new_v4();
        let machine_id = Uuid::new_v4();

        CompanyGraph {
            company: Company {
                id: company_id,
                name: "Ingenio La Esperanza".to_string(),
                cuit: "30-12345678-9".to_string(),
                address: "Ruta 34 km 12, Tucumán".to_string(),
            },
            parcels: vec![
                ParcelWithPlantings {
                    parcel: Parcel {
                        id: parcel_a,
                        company_id,
                        name: "Lote Norte".to_string(),
                        hectares: 120.0,
                    },
                    plantings: vec![PlantingWithHarvests {
                        planting: Planting {
                            id: planting_a,
                            parcel_id: parcel_a,
                            crop: "Caña de azúcar".to_string(),
                            season: "2024/2025".to_string(),
                        },
                        harvests: vec![
                            Harvest {
                                id: Uuid::new_v4(),
                                planting_id: planting_a,
                                date: date("2025-06-10"),
                                tonnes: 1200.0,
                                tch: Some(85.0),
                            },
                            Harvest {
                                id: Uuid::new_v4(),
                                planting_id: planting_a,
                                date: date("2025-07-02"),
                                tonnes: 800.0,
                                tch: Some(92.5),
                            },
                        ],
                    }],
                },
                ParcelWithPlantings {
                    parcel: Parcel {
                        id: parcel_b,
                        company_id,
                        name: "Lote Sur".to_string(),
                        hectares: 80.0,
                    },
                    plantings: vec![PlantingWithHarvests {
                        planting: Planting {
                            id: planting_b,
                            parcel_id: parcel_b,
                            crop: "Caña de azúcar".to_string(),
                            season: "2024/2025".to_string(),
                        },
                        harvests: vec![Harvest {
                            id: Uuid::new_v4(),
                            planting_id: planting_b,
                            date: date("2025-07-15"),
                            tonnes: 500.7,
                            tch: None,
                        }],
                    }],
                },
            ],
            machines: vec![MachineWithJobs {
                machine: Machine {
                    id: machine_id,
                    company_id,
                    name: "Cosechadora John Deere".to_string(),
                    kind: "cosechadora".to_string(),
                },
                jobs: vec![MachineJob {
                    id: Uuid::new_v4(),
                    machine_id,
                    description: "Cosecha Lote Norte".to_string(),
                    hectares: 45.3,
                    date: date("2025-06-10"),
                }],
            }],
            products: vec![],
            cheques: vec![Cheque {
                id: Uuid::new_v4(),
                company_id,
                number: "0001234".to_string(),
                amount: 1500000.50,
                due_date: date("2025-09-01"),
                status: ChequeStatus::Pendiente,
            }],
        }
    }

    #[test]
    fn report_contains_exact_totals() {
        let report = build_report(&fixture_graph());

        // 1200 + 800 + 500.7 tonnes, rounded to whole units
        assert!(report.contains("- Producción total: 2501 t"));
        // (85.0 + 92.5 + 0) / 3 = 59.1666..., one decimal
        assert!(report.contains("- TCH promedio: 59.2"));
        assert!(report.contains("- Total lotes: 2"));
        assert!(report.contains("- Nombre: Ingenio La Esperanza"));
        assert!(report.contains("- CUIT: 30-12345678-9"));
        assert!(report.contains("- Hectáreas trabajadas: 45 ha"));
        assert!(report.contains("- Monto pendiente de cobro: $1500000.50"));
    }

    #[test]
    fn report_without_harvests_averages_to_zero() {
        let mut graph = fixture_graph();
        for parcel in &mut graph.parcels {
            for planting in &mut parcel.plantings {
                planting.harvests.clear();
            }
        }

        let report = build_report(&graph);
        assert!(report.contains("- Producción total: 0 t"));
        assert!(report.contains("- TCH promedio: 0.0"));
    }

    #[tokio::test]
    async fn context_falls_back_on_failing_store() {
        // No schema at all: the very first query errors out.
        let db = Database::connect("sqlite::memory:").await.unwrap();
        let context = company_context(&db).await;
        assert_eq!(context, ERROR_FALLBACK);
    }

    #[tokio::test]
    async fn context_reports_missing_company() {
        let db = Database::connect("sqlite::memory:").await.unwrap();
        crate::shared::data::db::create_schema(&db).await.unwrap();

        let context = company_context(&db).await;
        assert_eq!(context, NO_COMPANY_FALLBACK);
    }

    #[tokio::test]
    async fn context_aggregates_seeded_store() {
        let db = Database::connect("sqlite::memory:").await.unwrap();
        crate::shared::data::db::create_schema(&db).await.unwrap();

        let company_id = Uuid::new_v4().to_string();
        let parcel_id = Uuid::new_v4().to_string();
        let planting_id = Uuid::new_v4().to_string();

        repository::ActiveModel {
            id: Set(company_id.clone()),
            name: Set("Agro del Valle".to_string()),
            cuit: Set("30-98765432-1".to_string()),
            address: Set("Salta, Argentina".to_string()),
        }
        .insert(&db)
        .await
        .unwrap();

        a002_parcel::repository::ActiveModel {
            id: Set(parcel_id.clone()),
            company_id: Set(company_id.clone()),
            name: Set("Lote 1".to_string()),
            hectares: Set(50.0),
        }
        .insert(&db)
        .await
        .unwrap();

        a003_planting::repository::ActiveModel {
            id: Set(planting_id.clone()),
            parcel_id: Set(parcel_id.clone()),
            crop: Set("Caña de azúcar".to_string()),
            season: Set("2024/2025".to_string()),
        }
        .insert(&db)
        .await
        .unwrap();

        a004_harvest::repository::ActiveModel {
            id: Set(Uuid::new_v4().to_string()),
            planting_id: Set(planting_id.clone()),
            date: Set(date("2025-06-01")),
            tonnes: Set(320.4),
            tch: Set(Some(80.6)),
        }
        .insert(&db)
        .await
        .unwrap();

        let context = company_context(&db).await;
        assert!(context.contains("- Nombre: Agro del Valle"));
        assert!(context.contains("- Total lotes: 1"));
        assert!(context.contains("- Producción total: 320 t"));
        assert!(context.contains("- TCH promedio: 80.6"));
    }
}
