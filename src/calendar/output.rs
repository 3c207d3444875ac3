use super::aggregate::{level, Grid, COLUMNS, ROWS};
use super::render::Renderer;
use crate::model::{CalendarCell, CalendarOutput, SCHEMA_VERSION};
use anyhow::Result;
use chrono::{NaiveDate, Utc};

pub const TITLE: &str = "Git Contribution Calendar:";

pub fn calendar_output(grid: &Grid, author: &str, as_of: NaiveDate, max_level: usize) -> CalendarOutput {
    CalendarOutput {
        version: SCHEMA_VERSION,
        generated_at: Utc::now(),
        author: author.to_string(),
        as_of,
        start_date: grid.start_date(),
        rows: ROWS,
        columns: COLUMNS,
        max_level,
        total_commits: grid.total(),
        cells: grid
            .cells()
            .map(|(row, col, date, count)| CalendarCell {
                row,
                col,
                date,
                count,
                level: level(count, max_level),
            })
            .collect(),
    }
}

pub fn output_json(grid: &Grid, author: &str, as_of: NaiveDate, max_level: usize) -> Result<()> {
    let output = calendar_output(grid, author, as_of, max_level);
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

pub fn output_calendar(grid: &Grid, renderer: &Renderer) -> Result<()> {
    println!("{}", renderer.theme().style().bold().apply_to(TITLE));
    print!("{}", renderer.render(grid));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::aggregate::aggregate;
    use crate::git::parse_log;
    use pretty_assertions::assert_eq;

    #[test]
    fn json_document_describes_every_cell() {
        let as_of = NaiveDate::from_ymd_opt(2024, 7, 1).unwrap();
        let history = parse_log(
            "alice",
            "abc123 2024-06-01\ndef456 2024-06-01\nbad-line\nghi789 2024-06-02\n",
        )
        .unwrap();
        let grid = aggregate(&history, as_of);
        let output = calendar_output(&grid, "alice", as_of, 5);

        assert_eq!(output.cells.len(), 364);
        assert_eq!(output.total_commits, 3);
        assert_eq!(output.start_date, NaiveDate::from_ymd_opt(2023, 7, 4).unwrap());

        let june_first = output
            .cells
            .iter()
            .find(|c| c.date == NaiveDate::from_ymd_opt(2024, 6, 1).unwrap())
            .unwrap();
        assert_eq!((june_first.count, june_first.level), (2, 2));

        let value = serde_json::to_value(&output).unwrap();
        assert_eq!(value["as_of"], "2024-07-01");
        assert_eq!(value["version"], SCHEMA_VERSION);
    }
}
