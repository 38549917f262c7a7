use super::Workbench;
use crate::kernel::{Action as KernelAction, Effect as KernelEffect, FileOp};
use std::collections::VecDeque;

impl Workbench {
    /// 派发 action 并同步执行副作用，结果再回灌 store，直到队列为空
    pub(super) fn dispatch_kernel(&mut self, action: KernelAction) -> bool {
        let mut queue = VecDeque::from([action]);
        let mut state_changed = false;

        while let Some(action) = queue.pop_front() {
            let result = self.store.dispatch(action);
            state_changed |= result.state_changed;
            for effect in result.effects {
                if let Some(follow_up) = self.run_effect(effect) {
                    queue.push_back(follow_up);
                }
            }
        }

        state_changed
    }

    fn run_effect(&mut self, effect: KernelEffect) -> Option<KernelAction> {
        match effect {
            KernelEffect::ReadFile(path) => Some(match self.files.read_file(&path) {
                Ok(content) => KernelAction::FileLoaded { path, content },
                Err(err) => KernelAction::FileFailed {
                    path,
                    op: FileOp::Read,
                    error: err.to_string(),
                },
            }),
            KernelEffect::WriteFile { path, content } => {
                Some(match self.files.write_file(&path, &content) {
                    Ok(()) => KernelAction::FileSaved { path },
                    Err(err) => KernelAction::FileFailed {
                        path,
                        op: FileOp::Write,
                        error: err.to_string(),
                    },
                })
            }
            KernelEffect::ListDir(dir) => Some(match self.files.read_dir(&dir) {
                Ok(entries) => KernelAction::DirListed { dir, entries },
                Err(err) => KernelAction::DirListFailed {
                    dir,
                    error: err.to_string(),
                },
            }),
            KernelEffect::SetTitle(title) => {
                self.pending_title = Some(title);
                None
            }
            // The event loop polls `should_quit`.
            KernelEffect::Quit => None,
        }
    }
}
