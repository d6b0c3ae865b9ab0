//! The response-format editor surface: the listing of committed formats and
//! the shared edit form.
//!
//! All state lives in `retort_editor::Editor`; this module only binds
//! widgets to the draft and forwards button presses. Mutations triggered
//! inside the render loop are gathered into a pending action and applied
//! after the loop, as immediate mode requires.

use eframe::egui;
use retort_editor::{Editor, EditorView};
use retort_types::{
    preview, EntityId, FieldPath, ValidationReport, FOLLOW_UP_MARKER, RESPONSE_MARKER,
};

/// Sample reply substituted into the listing's rendered preview.
const SAMPLE_REPLY: &str = "Here is the answer to your question.";

pub fn ui(ui: &mut egui::Ui, editor: &mut Editor) {
    ui.heading("AI Response Formatter");
    ui.add_space(4.0);

    match editor.view() {
        EditorView::Listing => listing(ui, editor),
        EditorView::Editing => form(ui, editor),
    }
}

enum ListAction {
    Edit(EntityId),
    Delete(EntityId),
}

fn listing(ui: &mut egui::Ui, editor: &mut Editor) {
    ui.horizontal(|ui| {
        ui.strong("Response Formats");
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.button("Add New Format").clicked() {
                editor.create();
            }
        });
    });

    if editor.store().is_empty() {
        ui.group(|ui| {
            ui.strong("No formats defined");
            ui.label("Create your first response format to start customizing AI responses.");
        });
        return;
    }

    let mut action = None;
    for format in editor.store().iter() {
        let Some(id) = format.id.clone() else {
            continue;
        };
        ui.push_id(id.as_str(), |ui| {
            ui.group(|ui| {
                ui.horizontal(|ui| {
                    ui.strong(&format.name);
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui.button("Delete").clicked() {
                            action = Some(ListAction::Delete(id.clone()));
                        }
                        if ui.button("Edit").clicked() {
                            action = Some(ListAction::Edit(id.clone()));
                        }
                    });
                });
                ui.label(&format.description);
                ui.monospace(&format.template);

                let questions = preview::flatten(format);
                if !questions.is_empty() {
                    ui.add_space(4.0);
                    ui.label("Follow-up Questions:");
                    for line in &questions {
                        ui.label(format!("• {line}"));
                    }
                }
                ui.collapsing("Preview", |ui| {
                    ui.monospace(preview::render(format, SAMPLE_REPLY));
                });
            });
        });
    }

    match action {
        Some(ListAction::Edit(id)) => editor.edit(&id),
        Some(ListAction::Delete(id)) => editor.delete(&id),
        None => {}
    }
}

enum FormAction {
    AddQuestion,
    DeleteQuestion(EntityId),
    AddOption(EntityId),
    DeleteOption(EntityId, EntityId),
}

fn form(ui: &mut egui::Ui, editor: &mut Editor) {
    let creating = editor.selected().is_none();
    ui.strong(if creating {
        "Create New Response Format"
    } else {
        "Edit Response Format"
    });
    ui.label("Define how AI responses should be formatted and add follow-up questions.");
    ui.add_space(8.0);

    // The report from the last rejected submit; cloned so the draft can be
    // borrowed mutably while error labels are looked up.
    let errors = editor.errors().clone();
    let mut action: Option<FormAction> = None;

    {
        let draft = editor.draft_mut();

        ui.label("Format Name");
        ui.add(egui::TextEdit::singleline(&mut draft.name).desired_width(f32::INFINITY));
        field_error(ui, &errors, &FieldPath::root("name"));

        ui.label("Description");
        ui.add(
            egui::TextEdit::multiline(&mut draft.description)
                .desired_width(f32::INFINITY)
                .desired_rows(2),
        );
        field_error(ui, &errors, &FieldPath::root("description"));

        ui.label("Response Template");
        ui.add(
            egui::TextEdit::multiline(&mut draft.template)
                .desired_width(f32::INFINITY)
                .desired_rows(4)
                .font(egui::TextStyle::Monospace),
        );
        field_error(ui, &errors, &FieldPath::root("template"));
        ui.label(
            egui::RichText::new(format!(
                "Use {RESPONSE_MARKER} for the main AI response and {FOLLOW_UP_MARKER} for follow-up questions."
            ))
            .small()
            .weak(),
        );

        ui.add_space(8.0);
        ui.horizontal(|ui| {
            ui.label("Follow-up Questions");
            if ui.button("Add Question").clicked() {
                action = Some(FormAction::AddQuestion);
            }
        });

        if draft.follow_up_questions.is_empty() {
            ui.group(|ui| {
                ui.label("No follow-up questions added yet");
            });
        }

        let questions_path = FieldPath::root("follow_up_questions");
        for (q_idx, question) in draft.follow_up_questions.iter_mut().enumerate() {
            let Some(question_id) = question.id.clone() else {
                continue;
            };
            let q_path = questions_path.index(q_idx);

            ui.push_id(question_id.as_str(), |ui| {
                ui.group(|ui| {
                    ui.horizontal(|ui| {
                        ui.label("Question");
                        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                            if ui.button("Delete").clicked() {
                                action = Some(FormAction::DeleteQuestion(question_id.clone()));
                            }
                        });
                    });
                    ui.add(
                        egui::TextEdit::singleline(&mut question.question)
                            .desired_width(f32::INFINITY),
                    );
                    field_error(ui, &errors, &q_path.child("question"));

                    ui.horizontal(|ui| {
                        ui.label("Answer Options");
                        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                            if ui.button("Add Option").clicked() {
                                action = Some(FormAction::AddOption(question_id.clone()));
                            }
                        });
                    });
                    let options_path = q_path.child("answer_options");
                    field_error(ui, &errors, &options_path);

                    if question.answer_options.is_empty() {
                        ui.label("No answer options added yet");
                    }
                    for (o_idx, option) in question.answer_options.iter_mut().enumerate() {
                        let Some(option_id) = option.id.clone() else {
                            continue;
                        };
                        let o_path = options_path.index(o_idx);

                        ui.push_id(option_id.as_str(), |ui| {
                            ui.group(|ui| {
                                ui.horizontal(|ui| {
                                    ui.label("Option Text");
                                    ui.with_layout(
                                        egui::Layout::right_to_left(egui::Align::Center),
                                        |ui| {
                                            if ui.button("Delete").clicked() {
                                                action = Some(FormAction::DeleteOption(
                                                    question_id.clone(),
                                                    option_id.clone(),
                                                ));
                                            }
                                        },
                                    );
                                });
                                ui.add(
                                    egui::TextEdit::singleline(&mut option.text)
                                        .desired_width(f32::INFINITY),
                                );
                                field_error(ui, &errors, &o_path.child("text"));

                                ui.label("Response");
                                ui.add(
                                    egui::TextEdit::multiline(&mut option.response)
                                        .desired_width(f32::INFINITY)
                                        .desired_rows(3),
                                );
                                field_error(ui, &errors, &o_path.child("response"));
                            });
                        });
                    }
                });
            });
        }
    }

    match action {
        Some(FormAction::AddQuestion) => editor.add_question(),
        Some(FormAction::DeleteQuestion(q)) => editor.delete_question(&q),
        Some(FormAction::AddOption(q)) => editor.add_answer_option(&q),
        Some(FormAction::DeleteOption(q, o)) => editor.delete_answer_option(&q, &o),
        None => {}
    }

    ui.add_space(8.0);
    ui.horizontal(|ui| {
        if ui.button("Cancel").clicked() {
            editor.cancel();
        }
        let submit_label = if creating { "Create Format" } else { "Update Format" };
        if ui.button(submit_label).clicked() {
            // A rejected submit keeps the report in the editor; the inline
            // labels above pick it up next frame.
            let _ = editor.submit();
        }
    });
    if !editor.errors().is_empty() {
        ui.colored_label(
            egui::Color32::RED,
            format!("{} validation error(s)", editor.errors().len()),
        );
    }
}

fn field_error(ui: &mut egui::Ui, errors: &ValidationReport, path: &FieldPath) {
    if let Some(message) = errors.message_for(path) {
        ui.colored_label(egui::Color32::RED, format!("⚠ {message}"));
    }
}
