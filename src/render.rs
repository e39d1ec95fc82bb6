use std::fmt;

use pathfinder::{Cell, Grid, Path};

pub struct RenderCfg {
    pub value_width: usize, // values are centered in this many columns
    pub pad_left: usize,
    pub pad_right: usize,
}

impl Default for RenderCfg {
    fn default() -> Self {
        Self {
            value_width: 3,
            pad_left: 2,
            pad_right: 1,
        }
    }
}

impl RenderCfg {
    fn cell_width(&self) -> usize {
        self.pad_left + self.value_width + self.pad_right
    }

    /// `+------+------+` for two columns, without the newline.
    fn separator(&self, columns: usize) -> String {
        let mut s = String::from("+");
        for _ in 0..columns {
            s.push_str(&"-".repeat(self.cell_width()));
            s.push('+');
        }
        s
    }

    fn write_cell(&self, f: &mut fmt::Formatter<'_>, value: Option<&str>) -> fmt::Result {
        write!(
            f,
            "|{:l$}{:^w$}{:r$}",
            "",
            value.unwrap_or(""),
            "",
            l = self.pad_left,
            w = self.value_width,
            r = self.pad_right
        )
    }
}

/// Box-drawn table of every cell cost.
pub struct GridTable<'a> {
    pub grid: &'a Grid,
    pub cfg: &'a RenderCfg,
}

impl fmt::Display for GridTable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sep = self.cfg.separator(self.grid.columns());
        writeln!(f, "{sep}")?;
        for row in self.grid.as_rows() {
            for val in row {
                self.cfg.write_cell(f, Some(&val.to_string()))?;
            }
            writeln!(f, "|")?;
            writeln!(f, "{sep}")?;
        }
        Ok(())
    }
}

/// Table showing the running cost along `path`, followed by the totals.
pub struct SolutionTable<'a> {
    pub grid: &'a Grid,
    pub path: &'a Path,
    pub cfg: &'a RenderCfg,
}

impl fmt::Display for SolutionTable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sep = self.cfg.separator(self.grid.columns());
        let rule = "-".repeat(sep.len());
        let mut total_cost: u64 = 0;
        let mut total_moves: usize = 0;

        writeln!(f, "SOLUTION:")?;
        writeln!(f, "{sep}")?;
        // row-major order visits a monotone path in path order
        for (r, row) in self.grid.as_rows().iter().enumerate() {
            for (c, &val) in row.iter().enumerate() {
                if self.path.contains(Cell::new(r, c)) {
                    total_cost += u64::from(val);
                    total_moves += 1;
                    self.cfg.write_cell(f, Some(&total_cost.to_string()))?;
                } else {
                    self.cfg.write_cell(f, None)?;
                }
            }
            writeln!(f, "|")?;
            writeln!(f, "{sep}")?;
        }

        writeln!(f)?;
        writeln!(f, "{rule}")?;
        writeln!(f, "Total Cost: {total_cost} | Total Moves: {total_moves}")?;
        write!(f, "{rule}")
    }
}
