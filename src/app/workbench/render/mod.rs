use super::layout::{self, WorkbenchLayout};
use super::Workbench;
use crate::kernel::{Action as KernelAction, FocusTarget};
use ratatui::layout::Rect;
use ratatui::Frame;

mod dialogs;
mod editor;
mod menu;
mod status;

pub(super) fn render(workbench: &mut Workbench, frame: &mut Frame, area: Rect) {
    let layout = layout::split(area);
    workbench.last_layout = Some(layout);
    workbench.sync_view_sizes(&layout);

    workbench.render_title(frame, layout.title);
    workbench.render_menu_bar(frame, layout.menu_bar);
    let cursor = workbench.render_editor(frame, layout.editor);
    workbench.render_status(frame, layout.status);

    // Overlays, bottom to top.
    workbench.render_dropdown(frame, &layout);
    let dialog_cursor = if workbench.store.state().file_dialog.visible {
        workbench.render_file_dialog(frame, area)
    } else if workbench.store.state().color_dialog.visible {
        workbench.render_color_dialog(frame, area)
    } else {
        None
    };

    workbench.last_cursor = match workbench.store.state().focus() {
        FocusTarget::Editor => cursor,
        FocusTarget::Menu => None,
        _ => dialog_cursor,
    };
}

impl Workbench {
    /// 把编辑区、下拉菜单、文件列表的可见尺寸同步给 kernel
    fn sync_view_sizes(&mut self, layout: &WorkbenchLayout) {
        let editor = layout.editor;
        let (width, height) = (editor.width as usize, editor.height as usize);
        let viewport = self.store.state().viewport;
        if viewport.width != width || viewport.height != height {
            let _ = self.dispatch_kernel(KernelAction::SetEditorViewSize { width, height });
        }

        let _ = self.dispatch_kernel(KernelAction::SetMenuViewHeight {
            rows: layout::menu_max_rows(layout),
        });

        if self.store.state().file_dialog.visible {
            let rows = layout::file_dialog(layout.area).list.height as usize;
            if self.store.state().file_dialog.view_height != rows {
                let _ = self.dispatch_kernel(KernelAction::SetFileDialogViewHeight { rows });
            }
        }
    }
}
