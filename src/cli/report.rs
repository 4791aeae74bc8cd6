use crate::cli::commands::ReportArgs;
use crate::dashboard::{all_pages, page};
use crate::errors::AuditError;
use crate::render::render_page;

pub async fn handle_report(args: ReportArgs) -> Result<(), AuditError> {
    let pages = if args.all { all_pages() } else { vec![page(args.page)] };

    if args.json {
        let json = if args.all {
            serde_json::to_string_pretty(&pages)?
        } else {
            serde_json::to_string_pretty(&pages[0])?
        };
        println!("{}", json);
        return Ok(());
    }

    for page in &pages {
        println!("{}", render_page(page));
    }
    Ok(())
}
