use eyre::{Context, Result};
use hyperclifford::{Algebra, Float, Product, Signature, Term};
use itertools::Itertools;
use serde::Serialize;

/// Clifford algebra calculator
///
/// Inspects the basis blades and multiplication table of an algebra, or
/// evaluates products of multivectors given as dense coefficient lists in
/// blade-index order (scalar, e1, e2, e12, e3, ...).
#[derive(Debug, clap::Parser)]
#[command(version)]
pub(crate) struct Args {
    /// Signature of the algebra, such as `Cl(3,0,0)`, `3,0,1`, or `1 3`.
    #[arg(
        short,
        long,
        global = true,
        env = "HYPERCLIFFORD_SIGNATURE",
        default_value = "Cl(3,0,0)"
    )]
    pub signature: Signature,

    /// Print output as JSON.
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub subcommand: Subcommand,
}

#[derive(clap::Subcommand, Debug)]
pub(crate) enum Subcommand {
    /// Print every basis blade with its grade and the sign of its square.
    Blades,
    /// Print the multiplication table of basis blades.
    Table,
    /// Evaluate a product of two multivectors.
    Product {
        /// Product to evaluate.
        #[arg(value_enum)]
        product: ProductArg,

        /// Coefficients of the left operand, separated by commas.
        #[arg(long, value_delimiter = ',', allow_negative_numbers = true)]
        lhs: Vec<Float>,
        /// Coefficients of the right operand, separated by commas.
        #[arg(long, value_delimiter = ',', allow_negative_numbers = true)]
        rhs: Vec<Float>,
    },
}

#[derive(clap::ValueEnum, Debug, Copy, Clone, PartialEq, Eq)]
pub(crate) enum ProductArg {
    /// Geometric product `a * b`.
    Geometric,
    /// Wedge (outer) product `a ^ b`.
    Wedge,
    /// Inner product `a | b`.
    Inner,
}
impl From<ProductArg> for Product {
    fn from(value: ProductArg) -> Self {
        match value {
            ProductArg::Geometric => Product::Geometric,
            ProductArg::Wedge => Product::Wedge,
            ProductArg::Inner => Product::Inner,
        }
    }
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
struct BladeInfo {
    index: usize,
    name: String,
    grade: u8,
    square: i8,
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
struct TableEntry {
    lhs: usize,
    rhs: usize,
    sign: i8,
    result: usize,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
struct ProductOutput {
    signature: Signature,
    product: String,
    terms: Vec<Term>,
    display: String,
}

pub(crate) fn exec(args: Args) -> Result<()> {
    let Args {
        signature,
        json,
        subcommand,
    } = args;

    let algebra = Algebra::new(signature);
    log::info!("using algebra {algebra}");

    match subcommand {
        Subcommand::Blades => {
            let blades = blade_infos(&algebra);
            if json {
                return write_json_output(&blades);
            }
            for b in blades {
                let square = signed_name(b.square, "1");
                println!("{:>4}  {:<8} grade {}  squares to {square}", b.index, b.name, b.grade);
            }
            Ok(())
        }

        Subcommand::Table => {
            if json {
                return write_json_output(&table_entries(&algebra));
            }
            for row in table_rows(&algebra) {
                println!("{row}");
            }
            Ok(())
        }

        Subcommand::Product { product, lhs, rhs } => {
            let product = Product::from(product);
            let lhs = algebra
                .multivector(lhs)
                .wrap_err("invalid left operand")?;
            let rhs = algebra
                .multivector(rhs)
                .wrap_err("invalid right operand")?;
            let result = lhs.try_product(product, &rhs)?;

            if json {
                write_json_output(&ProductOutput {
                    signature,
                    product: product.to_string(),
                    terms: result.nonzero_terms().collect(),
                    display: result.to_string(),
                })
            } else {
                println!("({lhs}) {product} ({rhs}) = {result}");
                Ok(())
            }
        }
    }
}

fn blade_infos(algebra: &Algebra) -> Vec<BladeInfo> {
    algebra
        .blades()
        .map(|index| BladeInfo {
            index,
            name: algebra.blade_name(index),
            grade: hyperclifford::blade::grade(index),
            square: algebra.sign_num(index, index),
        })
        .collect()
}

fn table_entries(algebra: &Algebra) -> Vec<TableEntry> {
    algebra
        .blades()
        .cartesian_product(algebra.blades())
        .map(|(lhs, rhs)| TableEntry {
            lhs,
            rhs,
            sign: algebra.sign_num(lhs, rhs),
            result: algebra.mask(lhs, rhs),
        })
        .collect()
}

/// Returns the multiplication table as aligned text, with a header row and a
/// header column of blade names.
fn table_rows(algebra: &Algebra) -> Vec<String> {
    let names = algebra.blades().map(|b| algebra.blade_name(b)).collect_vec();

    let mut cells = vec![std::iter::once(String::new()).chain(names.iter().cloned()).collect_vec()];
    for (i, name) in algebra.blades().zip(&names) {
        let row = std::iter::once(name.clone()).chain(
            algebra
                .blades()
                .map(|j| signed_name(algebra.sign_num(i, j), &names[algebra.mask(i, j)])),
        );
        cells.push(row.collect());
    }

    let width = cells.iter().flatten().map(|s| s.len()).max().unwrap_or(0);
    cells
        .iter()
        .map(|row| {
            row.iter()
                .map(|cell| format!("{cell:>width$}"))
                .join(" ")
                .trim_end()
                .to_owned()
        })
        .collect()
}

fn signed_name(sign: i8, name: &str) -> String {
    match sign {
        0 => "0".to_owned(),
        s if s < 0 => format!("-{name}"),
        _ => name.to_owned(),
    }
}

fn write_json_output<T: Serialize>(value: &T) -> Result<()> {
    serde_json::to_writer_pretty(std::io::stdout(), value)
        .context("error serializing data and writing to stdout")?;
    println!();
    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::{CommandFactory, Parser};
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_cli_definition() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_parse_product_args() {
        let args = Args::try_parse_from([
            "hyperclifford",
            "-s",
            "Cl(0,2,0)",
            "product",
            "geometric",
            "--lhs",
            "3,0,0,4",
            "--rhs",
            "3,0,0,-4",
        ])
        .unwrap();
        assert_eq!(args.signature, Signature::new(0, 2, 0));
        assert!(!args.json);
        match args.subcommand {
            Subcommand::Product { product, lhs, rhs } => {
                assert_eq!(product, ProductArg::Geometric);
                assert_eq!(lhs, [3.0, 0.0, 0.0, 4.0]);
                assert_eq!(rhs, [3.0, 0.0, 0.0, -4.0]);
            }
            other => panic!("wrong subcommand {other:?}"),
        }
    }

    #[test]
    fn test_parse_global_flags_after_subcommand() {
        let args =
            Args::try_parse_from(["hyperclifford", "blades", "--json", "--signature", "2,0,1"])
                .unwrap();
        assert!(args.json);
        assert_eq!(args.signature, Signature::projective(2));
        assert!(matches!(args.subcommand, Subcommand::Blades));

        assert!(Args::try_parse_from(["hyperclifford", "-s", "Cl(1,x)", "table"]).is_err());
        assert!(Args::try_parse_from(["hyperclifford", "product", "outer"]).is_err());
    }

    #[test]
    fn test_blade_infos() {
        let algebra = Algebra::from_pqr(1, 1, 1);
        let squares = blade_infos(&algebra).iter().map(|b| b.square).collect_vec();
        // 1, e1, e2, e12, e3, e13, e23, e123
        assert_eq!(squares, [1, 1, -1, 1, 0, 0, 0, 0]);
        assert_eq!(blade_infos(&algebra)[6].name, "e23");
        assert_eq!(blade_infos(&algebra)[6].grade, 2);
    }

    #[test]
    fn test_table_rows() {
        let algebra = Algebra::from_pqr(2, 0, 0);
        assert_eq!(
            table_rows(&algebra),
            [
                "        1   e1   e2  e12",
                "   1    1   e1   e2  e12",
                "  e1   e1    1  e12   e2",
                "  e2   e2 -e12    1  -e1",
                " e12  e12  -e2   e1   -1",
            ],
        );

        let entries = table_entries(&algebra);
        assert_eq!(entries.len(), 16);
        assert_eq!(
            entries[2 * 4 + 1],
            TableEntry {
                lhs: 2,
                rhs: 1,
                sign: -1,
                result: 3,
            },
        );
    }

    #[test]
    fn test_signed_name() {
        assert_eq!(signed_name(1, "e12"), "e12");
        assert_eq!(signed_name(-1, "e12"), "-e12");
        assert_eq!(signed_name(0, "e12"), "0");
    }
}
