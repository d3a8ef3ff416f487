//! Mounted application: store, controller, transport and the pending notice.
//!
//! # Design
//! `App` is the event-loop side of the core. Hosts that can block call
//! [`App::dispatch`], which runs begin, transport and complete in one go.
//! Hosts with their own async loop call [`App::begin`], execute the request
//! however they like, and hand the outcome back through [`App::complete`];
//! outcomes are applied in the order they are handed back. After
//! [`App::unmount`] late outcomes are dropped.

use tracing::debug;

use crate::controller::{Controller, Operation, Pending};
use crate::error::ApiError;
use crate::http::{HttpResponse, Transport};
use crate::notice::Notice;
use crate::store::Store;
use crate::types::Status;
use crate::view::{self, Action, Node};

pub struct App<T> {
    controller: Controller,
    transport: T,
    store: Option<Store>,
    notice: Option<Notice>,
}

impl<T: Transport> App<T> {
    /// An unmounted app. Call [`App::mount`] to create the store and load.
    pub fn new(controller: Controller, transport: T) -> Self {
        Self {
            controller,
            transport,
            store: None,
            notice: None,
        }
    }

    pub fn mount(&mut self) -> Result<(), Notice> {
        self.store = Some(Store::new());
        self.notice = None;
        self.load_all()
    }

    pub fn unmount(&mut self) {
        self.store = None;
        self.notice = None;
    }

    pub fn is_mounted(&self) -> bool {
        self.store.is_some()
    }

    pub fn store(&self) -> Option<&Store> {
        self.store.as_ref()
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    /// Dismiss and return the pending notice.
    pub fn take_notice(&mut self) -> Option<Notice> {
        self.notice.take()
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn render(&self) -> Option<Node> {
        self.store
            .as_ref()
            .map(|store| view::render(store, self.notice.as_ref()))
    }

    pub fn edit_draft(&mut self, text: &str) {
        if let Some(store) = self.store.as_mut() {
            self.controller.edit_draft(store, text);
        }
    }

    pub fn load_all(&mut self) -> Result<(), Notice> {
        let pending = self.controller.begin_load_all();
        self.run(pending)
    }

    pub fn add(&mut self) -> Result<(), Notice> {
        self.dispatch(&Action::Add, None)
    }

    pub fn delete(&mut self, id: i64) -> Result<(), Notice> {
        self.dispatch(&Action::Delete(id), None)
    }

    pub fn toggle(&mut self, id: i64, current: &Status) -> Result<(), Notice> {
        self.dispatch(
            &Action::Toggle {
                id,
                current: current.clone(),
            },
            None,
        )
    }

    /// Run the operation bound to `action`. `value` is the new input text
    /// for [`Action::EditDraft`] and ignored otherwise.
    pub fn dispatch(&mut self, action: &Action, value: Option<&str>) -> Result<(), Notice> {
        if let Action::EditDraft = action {
            self.edit_draft(value.unwrap_or_default());
            return Ok(());
        }
        match self.begin(action)? {
            Some(pending) => self.run(pending),
            None => Ok(()),
        }
    }

    /// Validate and build the request for `action` without sending it.
    /// Returns `Ok(None)` when there is nothing to send.
    pub fn begin(&mut self, action: &Action) -> Result<Option<Pending>, Notice> {
        let Some(store) = self.store.as_ref() else {
            debug!(?action, "ignoring action while unmounted");
            return Ok(None);
        };
        let begun = match action {
            Action::EditDraft => return Ok(None),
            Action::Add => self.controller.begin_add(store),
            Action::Delete(id) => Ok(self.controller.begin_delete(*id)),
            Action::Toggle { id, current } => self.controller.begin_toggle(*id, current),
        };
        begun.map(Some).map_err(|notice| self.raise(notice))
    }

    /// Apply the outcome of a request started with [`App::begin`].
    pub fn complete(
        &mut self,
        operation: Operation,
        response: Result<HttpResponse, ApiError>,
    ) -> Result<(), Notice> {
        let Some(store) = self.store.as_mut() else {
            debug!(?operation, "discarding response after unmount");
            return Ok(());
        };
        let result = self.controller.complete(store, operation, response);
        result.map_err(|notice| self.raise(notice))
    }

    fn run(&mut self, pending: Pending) -> Result<(), Notice> {
        if self.store.is_none() {
            debug!(operation = ?pending.operation, "not sending request while unmounted");
            return Ok(());
        }
        let response = self.transport.execute(pending.request);
        self.complete(pending.operation, response)
    }

    fn raise(&mut self, notice: Notice) -> Notice {
        self.notice = Some(notice.clone());
        notice
    }
}
