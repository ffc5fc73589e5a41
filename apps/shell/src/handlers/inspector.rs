use crate::models::args::InspectorAction;
use crate::session::Session;
use ectl::ControlError;
use ectl::domain::inspector::{FrameHandle, InspectorPanel};

pub fn run(session: &mut Session, action: InspectorAction) -> Result<(), ControlError> {
    let control = &mut session.control;
    match action {
        InspectorAction::Status => {},
        InspectorAction::Connect => control.connect_inspector(),
        InspectorAction::Show => control.show_inspector(),
        InspectorAction::Hide => control.hide_inspector(),
        InspectorAction::Toggle => control.toggle_inspector(),
        InspectorAction::Close => control.close_inspector(),
        InspectorAction::Attach => control.attach_inspector(),
        InspectorAction::Detach => control.detach_inspector(),
        InspectorAction::Console => control.show_console(),
        InspectorAction::Resources => control.show_resources(),
        InspectorAction::MainResource { frame } => {
            control.show_main_resource_for_frame(FrameHandle::new(control.surface(), frame))?;
        },
        InspectorAction::AddFrame => {
            if let Some(frame) = session.engine.add_frame(control.surface()) {
                println!("✅ Added frame {}", frame.frame());
            }
        },
        InspectorAction::Profile => control.toggle_page_profiling()?,
        InspectorAction::Select => control.toggle_element_selection()?,
        InspectorAction::Print { message } => control.print_error_to_console(message.join(" ")),
    }

    let control = &session.control;
    let panel = match control.active_inspector_panel() {
        Some(InspectorPanel::Console) => "console".to_owned(),
        Some(InspectorPanel::Resources) => "resources".to_owned(),
        Some(InspectorPanel::MainResource(frame)) => format!("main resource of frame {}", frame.frame()),
        None => "none".to_owned(),
    };
    println!(
        "inspector: {}; visible: {}; front: {}; attached: {}; profiling: {}; selecting: {}; panel: {panel}",
        control.inspector_state().label(),
        control.is_inspector_visible(),
        control.is_inspector_front(),
        control.is_inspector_attached(),
        control.is_profiling_page(),
        control.is_element_selection_active(),
    );
    Ok(())
}
