// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! CPLEX LP text output.
//!
//! Variables are written as `x<i>` and constraints as `c<i>`, using their
//! dense indices. Long rows are wrapped, since LP readers limit line length.

use crate::{
    index::VariableIndex, objective::ObjectiveSense, problem::LinearProblem,
    variable::VariableType,
};
use std::io::{self, Write};

const TERMS_PER_LINE: usize = 8;

/// Writes `problem` in CPLEX LP format.
pub fn write_lp<W>(problem: &LinearProblem, out: &mut W) -> io::Result<()>
where
    W: Write,
{
    match problem.objective().sense() {
        ObjectiveSense::Minimize => writeln!(out, "Minimize")?,
        ObjectiveSense::Maximize => writeln!(out, "Maximize")?,
    }
    write!(out, " obj:")?;
    write_terms(out, problem.objective().terms())?;
    writeln!(out)?;

    writeln!(out, "Subject To")?;
    for (i, constraint) in problem.constraints().iter().enumerate() {
        write!(out, " c{}:", i)?;
        write_terms(out, constraint.terms())?;
        writeln!(
            out,
            " {} {}",
            constraint.relation(),
            fmt_num(constraint.value())
        )?;
    }

    let types = problem.variable_types();
    let of_type = |wanted: VariableType| {
        (0..problem.num_variables())
            .map(VariableIndex::new)
            .filter(move |&v| types.get(v) == wanted)
    };

    let mut non_binary = of_type(VariableType::Continuous)
        .chain(of_type(VariableType::Integer))
        .peekable();
    if non_binary.peek().is_some() {
        writeln!(out, "Bounds")?;
        for v in non_binary {
            writeln!(out, " x{} >= 0", v.get())?;
        }
    }

    write_section(out, "General", of_type(VariableType::Integer))?;
    write_section(out, "Binary", of_type(VariableType::Binary))?;

    writeln!(out, "End")
}

/// Renders `problem` in CPLEX LP format.
pub fn to_lp_string(problem: &LinearProblem) -> String {
    let mut buf = Vec::new();
    // Writing into a Vec cannot fail.
    let _ = write_lp(problem, &mut buf);
    String::from_utf8_lossy(&buf).into_owned()
}

fn write_terms<W, I>(out: &mut W, terms: I) -> io::Result<()>
where
    W: Write,
    I: Iterator<Item = (VariableIndex, f64)>,
{
    let mut written = 0usize;
    for (v, c) in terms {
        if written > 0 && written % TERMS_PER_LINE == 0 {
            write!(out, "\n   ")?;
        }
        write!(out, " {} x{}", fmt_coefficient(c), v.get())?;
        written += 1;
    }
    if written == 0 {
        write!(out, " 0 x0")?;
    }
    Ok(())
}

fn write_section<W, I>(out: &mut W, title: &str, variables: I) -> io::Result<()>
where
    W: Write,
    I: Iterator<Item = VariableIndex>,
{
    let mut variables = variables.peekable();
    if variables.peek().is_none() {
        return Ok(());
    }

    writeln!(out, "{}", title)?;
    for v in variables {
        writeln!(out, " x{}", v.get())?;
    }
    Ok(())
}

fn fmt_coefficient(c: f64) -> String {
    if c < 0.0 {
        format!("- {}", fmt_num(-c))
    } else {
        format!("+ {}", fmt_num(c))
    }
}

fn fmt_num(v: f64) -> String {
    if (v - v.round()).abs() < 1e-9 && v.abs() < 1e15 {
        format!("{}", v.round() as i64)
    } else {
        format!("{}", v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        constraint::{LinearConstraint, Relation},
        objective::LinearObjective,
        variable::VariableTypes,
    };

    fn v(i: usize) -> VariableIndex {
        VariableIndex::new(i)
    }

    #[test]
    fn test_fmt_num() {
        assert_eq!(fmt_num(3.0), "3");
        assert_eq!(fmt_num(-2.0), "-2");
        assert_eq!(fmt_num(0.25), "0.25");
        assert_eq!(fmt_coefficient(-4.0), "- 4");
        assert_eq!(fmt_coefficient(2.5), "+ 2.5");
    }

    #[test]
    fn test_binary_program() {
        let mut p = LinearProblem::new(3, VariableType::Binary.into()).unwrap();
        p.set_objective(LinearObjective::from_coefficients(
            vec![5.0, -4.0, 2.0],
            ObjectiveSense::Minimize,
        ))
        .unwrap();
        p.add_constraint(LinearConstraint::from_terms([(v(0), 1.0)], Relation::Equal, 1.0))
            .unwrap();
        p.add_constraint(LinearConstraint::from_terms(
            [(v(1), 1.0), (v(0), -1.0)],
            Relation::LessEqual,
            0.0,
        ))
        .unwrap();

        let text = to_lp_string(&p);
        let expected = "\
Minimize
 obj: + 5 x0 - 4 x1 + 2 x2
Subject To
 c0: + 1 x0 = 1
 c1: - 1 x0 + 1 x1 <= 0
Binary
 x0
 x1
 x2
End
";
        assert_eq!(text, expected);
    }

    #[test]
    fn test_mixed_types_and_wrapping() {
        let types = VariableTypes::with_overrides(
            VariableType::Binary,
            [(v(0), VariableType::Integer), (v(1), VariableType::Continuous)],
        );
        let mut p = LinearProblem::new(10, types).unwrap();
        p.set_objective(LinearObjective::from_coefficients(
            vec![1.0; 10],
            ObjectiveSense::Maximize,
        ))
        .unwrap();

        let text = to_lp_string(&p);
        assert!(text.starts_with("Maximize\n obj: + 1 x0"));
        assert!(text.contains("+ 1 x7\n    + 1 x8"));
        assert!(text.contains("Bounds\n x1 >= 0\n x0 >= 0\n"));
        assert!(text.contains("General\n x0\n"));
        assert!(text.contains("Binary\n x2\n"));
        assert!(text.ends_with("End\n"));
    }

    #[test]
    fn test_empty_objective() {
        let p = LinearProblem::new(1, VariableType::Binary.into()).unwrap();
        assert!(to_lp_string(&p).starts_with("Minimize\n obj: 0 x0\n"));
    }
}
