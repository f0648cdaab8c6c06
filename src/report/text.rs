use std::io::{self, Write};

use crate::model::priors::DirichletPriors;
use crate::model::scores::ResultRow;
use crate::report::{PriorSummary, SchemeMean, format_f64_6};

/// T tokens of `"{alpha} "` with no trailing newline.
pub fn write_alpha<W: Write>(w: &mut W, priors: &DirichletPriors) -> io::Result<()> {
    let token = format_f64_6(priors.alpha);
    for _ in 0..priors.n_topics {
        write!(w, "{} ", token)?;
    }
    Ok(())
}

/// T lines, each W tokens of `"{beta} "`.
pub fn write_beta<W: Write>(w: &mut W, priors: &DirichletPriors) -> io::Result<()> {
    let token = format_f64_6(priors.beta);
    for _ in 0..priors.n_topics {
        for _ in 0..priors.vocab_size {
            write!(w, "{} ", token)?;
        }
        writeln!(w)?;
    }
    Ok(())
}

pub fn write_rtable<W: Write>(w: &mut W, rows: &[ResultRow]) -> io::Result<()> {
    for row in rows {
        writeln!(w, "{} {} {}", format_f64_6(row.value), row.fold, row.scheme)?;
    }
    Ok(())
}

pub fn mean_line(mean: &SchemeMean) -> String {
    format!("{} mean = {}", mean.name, format_f64_6(mean.mean))
}

pub fn render_prior_summary(summary: &PriorSummary) -> String {
    let mut out = String::new();
    out.push_str(&format!("topics (T): {}\n", summary.n_topics));
    out.push_str(&format!("vocabulary (W): {}\n", summary.vocab_size));
    out.push_str(&format!("alpha sum: {}\n", format_f64_6(summary.alpha_sum)));
    out.push_str(&format!(
        "alpha range: {} .. {}\n",
        format_f64_6(summary.alpha_min),
        format_f64_6(summary.alpha_max)
    ));
    for (t, sum) in summary.beta_row_sums.iter().enumerate() {
        out.push_str(&format!("beta row {} sum: {}\n", t, format_f64_6(*sum)));
    }
    out
}
