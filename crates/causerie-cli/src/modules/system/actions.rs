use causerie_core::{group_snapshot_schema, users_snapshot_schema};

use crate::cli_args::{SchemaArgs, SchemaKind};

pub(crate) fn handle_schema_command(args: SchemaArgs) -> anyhow::Result<()> {
    let schema = match args.kind {
        SchemaKind::Users => users_snapshot_schema()?,
        SchemaKind::Group => group_snapshot_schema()?,
    };
    println!("{}", serde_json::to_string_pretty(&schema)?);
    Ok(())
}
