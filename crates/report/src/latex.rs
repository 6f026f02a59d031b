//! LaTeX `tabular` rendering of solver traces.
//!
//! Every table has one centered, ruled column per field, a header row, and a
//! `\hline` after each row:
//!
//! ```text
//! \begin{tabular}{|c|c|c|c|c|}
//! \hline
//! Iteration & $a$ & $b$ & $c$ & $f(c)$ \\
//! \hline
//! 1 & 1.000000 & 3.000000 & 2.000000 & -6.618000 \\
//! \hline
//! \end{tabular}
//! ```
//!
//! An empty trace renders as an empty string.

use nullpoint_solvers::{
    scalar::{bisection, fixed_point, newton},
    system,
};

use crate::format::{fixed, sci};

const VALUE_DIGITS: usize = 6;
const ERROR_DIGITS: usize = 2;

/// A record that can be rendered as one row of a LaTeX table.
pub trait TableRow {
    /// Returns the column headers for a table of records like this one.
    fn headers(&self) -> Vec<String>;

    /// Returns this record's cells, one per header.
    fn cells(&self) -> Vec<String>;
}

/// Renders `records` as a LaTeX `tabular`.
///
/// Headers are taken from the first record. Returns an empty string when
/// there are no records.
#[must_use]
pub fn table<R: TableRow>(records: &[R]) -> String {
    let Some(first) = records.first() else {
        return String::new();
    };

    let headers = first.headers();
    let columns = vec!["c"; headers.len()].join("|");

    let mut lines = vec![
        format!("\\begin{{tabular}}{{|{columns}|}}"),
        "\\hline".to_owned(),
        row(&headers),
        "\\hline".to_owned(),
    ];

    for record in records {
        lines.push(row(&record.cells()));
        lines.push("\\hline".to_owned());
    }

    lines.push("\\end{tabular}".to_owned());
    lines.join("\n")
}

fn row(cells: &[String]) -> String {
    format!("{} \\\\", cells.join(" & "))
}

fn headers(names: &[&str]) -> Vec<String> {
    names.iter().map(|name| (*name).to_owned()).collect()
}

impl TableRow for bisection::Record {
    fn headers(&self) -> Vec<String> {
        headers(&["Iteration", "$a$", "$b$", "$c$", "$f(c)$"])
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.iter.to_string(),
            fixed(self.left, VALUE_DIGITS),
            fixed(self.right, VALUE_DIGITS),
            fixed(self.midpoint, VALUE_DIGITS),
            fixed(self.value, VALUE_DIGITS),
        ]
    }
}

impl TableRow for newton::Record {
    fn headers(&self) -> Vec<String> {
        headers(&["Iteration", "$x_n$", "$f(x_n)$", "$f'(x_n)$", "$x_{n+1}$"])
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.iter.to_string(),
            fixed(self.x, VALUE_DIGITS),
            fixed(self.value, VALUE_DIGITS),
            fixed(self.derivative, VALUE_DIGITS),
            fixed(self.next, VALUE_DIGITS),
        ]
    }
}

impl TableRow for fixed_point::Record {
    fn headers(&self) -> Vec<String> {
        headers(&["Iteration", "$x_n$", "$x_{n+1}$", "$f(x_{n+1})$", "Error"])
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.iter.to_string(),
            fixed(self.x_prev, VALUE_DIGITS),
            fixed(self.x_next, VALUE_DIGITS),
            fixed(self.value, VALUE_DIGITS),
            sci(self.error, ERROR_DIGITS),
        ]
    }
}

impl TableRow for system::newton::Record {
    fn headers(&self) -> Vec<String> {
        (1..=self.x.len())
            .map(|i| format!("$x_{{{i}}}$"))
            .chain([r"$\|\Delta x\|$".to_owned(), r"$\|F(x)\|$".to_owned()])
            .collect()
    }

    fn cells(&self) -> Vec<String> {
        self.x
            .iter()
            .map(|&component| fixed(component, VALUE_DIGITS))
            .chain([
                sci(self.step_norm, ERROR_DIGITS),
                sci(self.residual_norm, ERROR_DIGITS),
            ])
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use nalgebra::DVector;

    #[test]
    fn empty_trace_renders_nothing() {
        let records: Vec<bisection::Record> = Vec::new();
        assert_eq!(table(&records), "");
    }

    #[test]
    fn bisection_table_layout() {
        let records = [
            bisection::Record {
                iter: 1,
                left: 1.0,
                right: 3.0,
                midpoint: 2.0,
                value: -6.618,
            },
            bisection::Record {
                iter: 2,
                left: 2.0,
                right: 3.0,
                midpoint: 2.5,
                value: 4.4865,
            },
        ];

        let expected = [
            r"\begin{tabular}{|c|c|c|c|c|}",
            r"\hline",
            r"Iteration & $a$ & $b$ & $c$ & $f(c)$ \\",
            r"\hline",
            r"1 & 1.000000 & 3.000000 & 2.000000 & -6.618000 \\",
            r"\hline",
            r"2 & 2.000000 & 3.000000 & 2.500000 & 4.486500 \\",
            r"\hline",
            r"\end{tabular}",
        ]
        .join("\n");

        assert_eq!(table(&records), expected);
    }

    #[test]
    fn newton_row() {
        let record = newton::Record {
            iter: 1,
            x: 10.0,
            value: -512.0,
            derivative: 20.0,
            next: 35.6,
        };

        assert_eq!(
            record.headers().join(" & "),
            "Iteration & $x_n$ & $f(x_n)$ & $f'(x_n)$ & $x_{n+1}$"
        );
        assert_eq!(
            record.cells(),
            ["1", "10.000000", "-512.000000", "20.000000", "35.600000"]
        );
    }

    #[test]
    fn fixed_point_error_is_scientific() {
        let record = fixed_point::Record {
            iter: 7,
            x_prev: 0.75,
            x_next: 0.731_688_868_873_820_9,
            value: 0.012_283_678_900_760_4,
            error: 0.018_311_131_126_179_1,
        };

        assert_eq!(
            record.cells(),
            ["7", "0.750000", "0.731689", "0.012284", "1.83e-02"]
        );
    }

    #[test]
    fn system_table_has_a_column_per_component() {
        let records = [system::newton::Record {
            iter: 1,
            x: DVector::from_vec(vec![3.0, 0.9, -1.5]),
            step_norm: 0.491_696_862_447_450_8,
            residual_norm: 4.171_583_690_120_891e-9,
        }];

        let rendered = table(&records);
        let lines: Vec<&str> = rendered.lines().collect();

        assert_eq!(lines[0], r"\begin{tabular}{|c|c|c|c|c|}");
        assert_eq!(
            lines[2],
            r"$x_{1}$ & $x_{2}$ & $x_{3}$ & $\|\Delta x\|$ & $\|F(x)\|$ \\"
        );
        assert_eq!(
            lines[4],
            r"3.000000 & 0.900000 & -1.500000 & 4.92e-01 & 4.17e-09 \\"
        );
    }
}
