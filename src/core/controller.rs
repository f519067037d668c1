use crate::camera::CameraMovement;

/// Input button identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Button {
    KeyW,
    KeyA,
    KeyS,
    KeyD,
    Escape,
}

impl Button {
    /// Camera direction bound to this button, if any
    pub const fn movement(self) -> Option<CameraMovement> {
        match self {
            Button::KeyW => Some(CameraMovement::Forward),
            Button::KeyS => Some(CameraMovement::Backward),
            Button::KeyA => Some(CameraMovement::Left),
            Button::KeyD => Some(CameraMovement::Right),
            Button::Escape => None,
        }
    }
}

/// Controller - handles button input states
pub trait Controller {
    /// Check if button is currently down
    fn is_down(&self, button: Button) -> bool;

    /// Get all currently pressed buttons
    fn get_down_keys(&self) -> &[Button];

    /// Directions of every held movement key, in press order
    fn held_movements(&self) -> Vec<CameraMovement> {
        self.get_down_keys()
            .iter()
            .filter_map(|button| button.movement())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct MockController {
        pressed: Vec<Button>,
    }

    impl Controller for MockController {
        fn is_down(&self, button: Button) -> bool {
            self.pressed.contains(&button)
        }

        fn get_down_keys(&self) -> &[Button] {
            &self.pressed
        }
    }

    #[test]
    fn test_wasd_mapping() {
        assert_eq!(Button::KeyW.movement(), Some(CameraMovement::Forward));
        assert_eq!(Button::KeyS.movement(), Some(CameraMovement::Backward));
        assert_eq!(Button::KeyA.movement(), Some(CameraMovement::Left));
        assert_eq!(Button::KeyD.movement(), Some(CameraMovement::Right));
        assert_eq!(Button::Escape.movement(), None);
    }

    #[test]
    fn test_held_movements_skips_non_movement_keys() {
        let controller = MockController {
            pressed: vec![Button::KeyD, Button::Escape, Button::KeyW],
        };

        assert!(controller.is_down(Button::Escape));
        assert_eq!(
            controller.held_movements(),
            vec![CameraMovement::Right, CameraMovement::Forward]
        );
    }

    #[test]
    fn test_no_keys_no_movement() {
        let controller = MockController { pressed: vec![] };
        assert!(controller.held_movements().is_empty());
        assert!(!controller.is_down(Button::KeyW));
    }
}
