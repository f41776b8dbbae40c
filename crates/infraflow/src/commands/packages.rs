use colored::Colorize;
use infraflow_cloud::PackageSize;

pub fn handle() {
    println!("{}", "Sizing packages:".bold());
    for size in PackageSize::ALL {
        println!(
            "  {} {}",
            format!("{:<9}", format!("--{}", size)).cyan(),
            size.package().describe()
        );
    }
}
