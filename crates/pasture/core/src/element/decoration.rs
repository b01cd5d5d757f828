use super::{Bucket, Calf, Grass};

/// Elements that can put on a little show for whoever is watching.
pub trait Decoration {
    fn show_off(&self);
}

impl Decoration for Grass {
    /// Sways one cell east and back again.
    fn show_off(&self) {
        let home = self.position();
        self.set_position(home.moved_by(1, 0));
        self.set_position(home);
    }
}

impl Decoration for Calf {
    fn show_off(&self) {
        self.show_message("I always look good!");
    }
}

impl Decoration for Bucket {
    fn show_off(&self) {
        self.show_message("Whee, how pretty I am!");
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use super::*;
    use crate::id::IdGenerator;
    use crate::observer::{ChangeEvent, Listener, PropertyKey, Value};
    use crate::state::{Message, Position};

    #[test]
    fn grass_sways_and_returns() {
        let grass = Grass::grass(&IdGenerator::new());
        grass.set_position(Position::new(2, 1));

        let positions = Arc::new(Mutex::new(Vec::new()));
        let listener: Arc<dyn Listener> = {
            let positions = Arc::clone(&positions);
            Arc::new(move |event: &ChangeEvent| {
                assert_eq!(event.key, PropertyKey::Position);
                positions
                    .lock()
                    .unwrap()
                    .push(event.new.as_ref().and_then(Value::position));
            })
        };
        grass.add_listener(listener);

        grass.show_off();

        assert_eq!(
            *positions.lock().unwrap(),
            vec![Some(Position::new(3, 1)), Some(Position::new(2, 1))]
        );
        assert_eq!(grass.position(), Position::new(2, 1));
    }

    #[test]
    fn grass_at_the_coordinate_limit_still_sways() {
        let grass = Grass::grass(&IdGenerator::new());
        grass.set_position(Position::new(i32::MAX, 0));
        grass.show_off();
        assert_eq!(grass.position(), Position::new(i32::MAX, 0));
    }

    #[test]
    fn calf_and_bucket_speak_up() {
        let ids = IdGenerator::new();
        let calf = Calf::calf(&ids);
        let bucket = Bucket::with_generator(&ids);

        calf.show_off();
        bucket.show_off();

        assert_eq!(calf.message(), Message::from("I always look good!"));
        assert_eq!(bucket.message(), Message::from("Whee, how pretty I am!"));
    }
}
