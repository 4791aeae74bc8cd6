use crate::cli::commands::FindingsArgs;
use crate::dashboard::dashboard_findings;
use crate::errors::AuditError;
use crate::render::render_findings;

pub async fn handle_findings(args: FindingsArgs) -> Result<(), AuditError> {
    let findings = dashboard_findings();
    if args.json {
        println!("{}", serde_json::to_string_pretty(&findings)?);
    } else {
        print!("{}", render_findings(&findings));
    }
    Ok(())
}
