use comfy_table::{presets::UTF8_FULL, Table};
use fairdice_core::{probability_matrix, DiceSet};

/// Pairwise win-probability matrix: each cell is the row die's chance
/// of beating the column die.
pub fn probability_table(dice: &DiceSet) -> Table {
    let matrix = probability_matrix(dice);

    let mut table = Table::new();
    table.load_preset(UTF8_FULL);

    let mut header = vec!["User dice v".to_string()];
    header.extend(dice.iter().map(|die| die.to_string()));
    table.set_header(header);

    for (i, die) in dice.iter().enumerate() {
        let mut row = vec![die.to_string()];
        row.extend(matrix[i].iter().map(|p| format!("{:.4}", p.win)));
        table.add_row(row);
    }

    table
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_renders_canonical_probabilities() {
        let dice = DiceSet::parse(["1,2,3,4,5,6", "6,5,4,3,2,1", "2,3,4,5,6,1"]).unwrap();
        let rendered = probability_table(&dice).to_string();

        // 15/36 against the reversed die.
        assert!(rendered.contains("0.4167"));
        assert!(rendered.contains("1,2,3,4,5,6"));
    }
}
