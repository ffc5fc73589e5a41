use crate::models::args::FlagAction;
use crate::session::Session;
use ectl::ControlError;
use ectl::domain::features::{FeatureDescriptor, FeatureFilter};

pub fn run(session: &mut Session, action: FlagAction) -> Result<(), ControlError> {
    match action {
        FlagAction::List { category, min_status, search, include_hidden, sort, grouped } => {
            let mut filter = FeatureFilter::new().include_hidden(include_hidden || session.include_hidden);
            filter.category = category;
            filter.min_status = min_status;
            if let Some(text) = search {
                filter = filter.search(text);
            }

            if grouped {
                for (category, descriptors) in session.control.grouped_features(&filter) {
                    println!("[{category}]");
                    for descriptor in &descriptors {
                        print_row(session, descriptor)?;
                    }
                }
            } else {
                let listed = session.control.list_features(&filter, sort);
                if listed.is_empty() {
                    println!("ℹ️ No features match.");
                }
                for descriptor in &listed {
                    print_row(session, descriptor)?;
                }
            }
        },
        FlagAction::Get { key } => {
            let descriptor = session.control.feature(&key)?;
            print_row(session, &descriptor)?;
            if descriptor.has_details() {
                println!("    {}", descriptor.details());
            }
            println!("    default: {}, hidden: {}", on_off(descriptor.default_value()), descriptor.is_hidden());
        },
        FlagAction::Set { key, enabled } => {
            session.control.set_feature_enabled(&key, enabled)?;
            println!("✅ {key} = {}", on_off(enabled));
        },
    }
    Ok(())
}

fn print_row(session: &mut Session, descriptor: &FeatureDescriptor) -> Result<(), ControlError> {
    let enabled = session.control.is_feature_enabled(descriptor.key())?;
    let marker = if session.control.is_feature_user_configured(descriptor.key()) { "*" } else { "" };
    println!(
        "{:<3}{marker:<2}{:<44} {:<10} {:<14} {}",
        on_off(enabled),
        descriptor.key(),
        descriptor.status().to_string(),
        descriptor.category().to_string(),
        descriptor.name(),
    );
    Ok(())
}

const fn on_off(value: bool) -> &'static str {
    if value { "on" } else { "off" }
}
