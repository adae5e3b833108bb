use starchart_common::PlanetColumn;

pub fn handle_columns_command() {
    println!("Filterable and sortable columns:");
    for column in PlanetColumn::ALL {
        println!("  {}", column);
    }
    println!();
    println!("Comparison operators (for --filter expressions):");
    println!("  >   greater-than");
    println!("  <   less-than");
    println!("  ==  equal-to");
}
