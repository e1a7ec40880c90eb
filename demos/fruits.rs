use colored::Colorize;

use minitrees::prelude::*;


const FULL_WIDTH: usize = 48;
const STAT_WIDTH: usize = 20;


fn print_stats<L: Learner>(learner: &L) {
    let header = format!(
        "{:=>FULL_WIDTH$}\n{:^FULL_WIDTH$}\n{:->FULL_WIDTH$}",
        "", "STATS".bold(), "",
    );
    println!(
        "\n{header}\n\
        + {:<STAT_WIDTH$}\t{:>STAT_WIDTH$}",
        "Learner".bold(),
        learner.name().bold().green(),
    );

    if let Some(info) = learner.info() {
        let line = info.into_iter()
            .map(|(key, val)| {
                format!(
                    "    + {:<STAT_WIDTH$}\t{:>width$}",
                    key,
                    val.bold().yellow(),
                    width = STAT_WIDTH - 4
                )
            })
            .collect::<Vec<_>>()
            .join("\n");
        println!("{line}");
    }
    println!("{:=^FULL_WIDTH$}\n", "".bold());
}


fn main() -> minitrees::Result<()> {
    let mut path = std::env::current_dir()
        .map_err(|e| TreeError::UnableToRead(e.to_string()))?;
    path.push("tests/dataset/fruits.csv");

    let sample = SampleReader::new()
        .file(path)
        .has_header(true)
        .read()?;


    // Classification ----------------------------------
    let tree = DecisionTreeBuilder::new()
        .criterion(Criterion::Gini)
        .build();
    print_stats(&tree);

    let f = tree.fit(&sample)?;
    println!("{f}");

    for row in sample.rows() {
        let fields = row.iter()
            .map(|v| v.to_string())
            .collect::<Vec<_>>()
            .join(", ");
        let dist = f.distribution(row)?;
        println!(
            "{:<24} {} {}",
            fields,
            "->".bold(),
            dist.to_string().bold().cyan(),
        );
    }


    // Regression on the diameter ----------------------
    let rows = sample.rows()
        .iter()
        .map(|row| {
            let label = row[2].clone();
            vec![row[0].clone(), label, row[1].clone()]
        })
        .collect::<Vec<_>>();
    let sample = Sample::from_rows(rows)?
        .set_header(["color", "label"])?
        .set_target_name("diameter");

    let tree = RegressionTreeBuilder::new()
        .min_samples(1)
        .build();
    print_stats(&tree);

    let f = tree.fit(&sample)?;
    println!("{f}");
    println!("{}", f.to_dot().dimmed());

    Ok(())
}
