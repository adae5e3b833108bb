use crate::argparse::ListArgs;
use crate::client::PlanetApiClient;
use log::info;
use planet_search::Filter;
use starchart_common::{ColumnFilter, Explorer, Planet, PlanetColumn, SortDirection, SortSpec};
use std::str::FromStr;
use tabular::{Row, Table};

pub async fn handle_list_command(
    args: ListArgs,
    api_url: String,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut explorer = Explorer::new();

    for expression in &args.filter {
        let parsed = Filter::from_str(expression)?;
        let filter = ColumnFilter::try_from(parsed)?;
        explorer.add_filter(filter)?;
    }
    if let Some(name) = args.name {
        explorer.set_text_query(name);
    }
    if let Some(column) = args.sort_by.as_deref() {
        let column = PlanetColumn::from_str(column)?;
        let direction = if args.desc {
            SortDirection::Desc
        } else {
            SortDirection::Asc
        };
        explorer.set_sort(SortSpec::new(column, direction));
    }

    let client = PlanetApiClient::new(api_url)?;
    explorer.set_fetch_state(client.fetch_state().await);

    // presentation short-circuits on a retrieval failure; the view would not
    // be meaningful
    if let Some(message) = &explorer.fetch_state().error_message {
        return Err(message.clone().into());
    }

    let planets = explorer.view();
    info!(
        "{} of {} planets match",
        planets.len(),
        explorer
            .fetch_state()
            .records
            .as_ref()
            .map(Vec::len)
            .unwrap_or_default()
    );

    if args.json {
        println!("{}", serde_json::to_string_pretty(&planets)?);
    } else {
        print!("{}", planets_table(&planets));
    }

    Ok(())
}

fn planets_table(planets: &[Planet]) -> Table {
    #[allow(clippy::literal_string_with_formatting_args)]
    let mut table = Table::new("{:<}  {:>}  {:>}  {:>}  {:>}  {:>}").with_row(Row::from_cells(
        [
            "Name",
            "Rotation",
            "Orbital period",
            "Diameter",
            "Surface water",
            "Population",
        ]
        .iter()
        .cloned(),
    ));

    for planet in planets {
        table.add_row(
            Row::new()
                .with_cell(&planet.name)
                .with_cell(&planet.rotation_period)
                .with_cell(&planet.orbital_period)
                .with_cell(&planet.diameter)
                .with_cell(&planet.surface_water)
                .with_cell(&planet.population),
        );
    }
    table
}
