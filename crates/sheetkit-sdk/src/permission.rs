// SPDX-License-Identifier: MIT
//
// Embedded web-view permission requests.
//
// Payment flows inside the checkout surface may request camera or
// microphone access. The SDK forwards the request and expects a grant or
// deny decision.

/// Resources a permission request can name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PermissionResource {
    Camera,
    Microphone,
    ProtectedMedia,
}

/// Decision recorded against a [`PermissionRequest`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PermissionDecision {
    Granted(Vec<PermissionResource>),
    Denied,
}

/// A pending permission request from the embedded checkout web view.
#[derive(Debug, Clone, PartialEq)]
pub struct PermissionRequest {
    resources: Vec<PermissionResource>,
    decision: Option<PermissionDecision>,
}

impl PermissionRequest {
    pub fn new(resources: Vec<PermissionResource>) -> Self {
        Self {
            resources,
            decision: None,
        }
    }

    pub fn resources(&self) -> &[PermissionResource] {
        &self.resources
    }

    /// Grant the given subset of the requested resources.
    pub fn grant(&mut self, resources: Vec<PermissionResource>) {
        self.decision = Some(PermissionDecision::Granted(resources));
    }

    pub fn deny(&mut self) {
        self.decision = Some(PermissionDecision::Denied);
    }

    pub fn decision(&self) -> Option<&PermissionDecision> {
        self.decision.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grant_records_decision() {
        let mut request =
            PermissionRequest::new(vec![PermissionResource::Camera, PermissionResource::Microphone]);
        assert_eq!(request.decision(), None);

        let all = request.resources().to_vec();
        request.grant(all);
        assert_eq!(
            request.decision(),
            Some(&PermissionDecision::Granted(vec![
                PermissionResource::Camera,
                PermissionResource::Microphone,
            ]))
        );
    }
}
