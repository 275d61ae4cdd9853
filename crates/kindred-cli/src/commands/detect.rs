//! Detect command implementation.

use crate::cli::DetectArgs;
use crate::config::Config;
use crate::error::Result;
use crate::output::Formatter;
use crate::snapshot::{parse_family_id, parse_member_id};
use crate::source::FamilySource;
use kindred_engine::{DetectionRequest, RelationshipDetectionService};
use std::collections::HashMap;

/// Execute the detect command.
pub fn execute_detect(args: DetectArgs, config: &Config, formatter: &Formatter) -> Result<()> {
    let family_id = parse_family_id(&args.family)?;
    let member_a = parse_member_id(&args.member_a)?;
    let member_b = parse_member_id(&args.member_b)?;
    let request = DetectionRequest::new(family_id, member_a, member_b)?;

    let mut detection_config = config.detection.clone();
    if let Some(locale) = args.locale {
        detection_config.locale = locale.into();
    }

    let source = FamilySource::open(&args.source, config)?;
    let service = RelationshipDetectionService::new(source, &detection_config);
    let (members, relationships) = service.load_family(family_id)?;
    let detection = service.detect_in(&request, &members, &relationships);

    tracing::info!(
        family = %family_id,
        a = %member_a,
        b = %member_b,
        locale = detection_config.locale.as_str(),
        from_a_to_b = %detection.from_a_to_b,
        "Detection complete"
    );

    let names: HashMap<_, _> = members.into_iter().map(|m| (m.id, m.name)).collect();

    println!("{}", formatter.format_detection(&detection, &names)?);

    Ok(())
}
