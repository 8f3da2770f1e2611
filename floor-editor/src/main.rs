use floor_editor::grid::policy;
use floor_editor::{EditorConfig, EditorSession, init_logger_with_file};
use shared::models::{AvailabilityQuery, ItemKind};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Environment and logging
    dotenvy::dotenv().ok();
    let config = EditorConfig::from_env();
    init_logger_with_file(&config.log_level, config.log_json, config.log_dir.as_deref())?;

    // 2. Backend client
    let client = config.client_config().build_http_client()?;
    tracing::info!(url = %config.api_url, "Loading floor plan");

    // 3. Session and availability
    let mut session = EditorSession::load(client).await?;
    session
        .refresh_availability(&AvailabilityQuery::default())
        .await;

    let bounds = session.bounds();
    tracing::info!(
        plan = session.name(),
        width = bounds.width,
        height = bounds.height,
        floors = session.levels().len(),
        "Floor plan ready"
    );

    // 4. Per-floor summary
    for level in session.levels() {
        let name = session.floors().name_of(level);
        let items = session.items_on_floor(level);
        let visible = session.visible_items(level);
        tracing::info!(level, name = %name, items = items.len(), visible = visible.len(), "Floor");

        for kind in ItemKind::ALL {
            let count = visible.iter().filter(|item| item.kind == kind).count();
            if count > 0 {
                tracing::info!(level, kind = policy(kind).label, count, "Floor contents");
            }
        }

        for y in 0..bounds.height {
            let row: String = (0..bounds.width)
                .map(|x| {
                    session
                        .store()
                        .get(x, y, level)
                        .map_or('.', |item| policy(item.kind).glyph)
                })
                .collect();
            tracing::debug!(level, y, "{}", row);
        }

        for table in session.floor_presentation(level) {
            tracing::info!(
                x = table.x,
                y = table.y,
                name = table.table_name.as_deref().unwrap_or("-"),
                seats = table.total_seats,
                free = table.available_seats,
                available = table.is_available,
                source = ?table.source,
                "Table"
            );
        }
    }

    // 5. Reservation preview
    match session.best_available_table(config.party_size) {
        Some(table) => tracing::info!(
            party = config.party_size,
            level = table.floor_level,
            x = table.x,
            y = table.y,
            seats = table.available_seats,
            "Best available table"
        ),
        None => tracing::info!(party = config.party_size, "No table available"),
    }

    Ok(())
}
