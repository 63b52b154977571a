mod tests {
    use prysma_light::{
        EffectId, LightCommand, LightState, ProtocolError, Rgb, decode_command,
        encode_effect_list, encode_state,
    };

    #[test]
    fn test_decode_orders_commands() {
        let payload = br#"{"state":"ON","brightness":40,"color":{"r":1,"g":2,"b":3},"effect":"Fire","speed":5}"#;
        let commands = decode_command(payload).unwrap();
        assert_eq!(
            commands.as_slice(),
            &[
                LightCommand::effect_by_name("Fire").unwrap(),
                LightCommand::SetColor(Rgb::new(1, 2, 3)),
                LightCommand::SetBrightness(40),
                LightCommand::SetSpeed(5),
                LightCommand::TurnOn,
            ]
        );
    }

    #[test]
    fn test_decode_clamps_ranges() {
        let commands = decode_command(br#"{"brightness":250,"speed":0}"#).unwrap();
        assert_eq!(
            commands.as_slice(),
            &[LightCommand::SetBrightness(100), LightCommand::SetSpeed(1)]
        );
    }

    #[test]
    fn test_decode_state_and_identify() {
        let commands = decode_command(br#"{"state":"OFF"}"#).unwrap();
        assert_eq!(commands.as_slice(), &[LightCommand::TurnOff]);

        let commands = decode_command(br#"{"state":"maybe","identify":true}"#).unwrap();
        assert_eq!(commands.as_slice(), &[LightCommand::Identify]);

        let commands = decode_command(br"{}").unwrap();
        assert!(commands.is_empty());
    }

    #[test]
    fn test_decode_overlong_effect_name_selects_none() {
        let commands =
            decode_command(br#"{"effect":"ThisEffectNameIsFarTooLongToKeep"}"#).unwrap();
        assert_eq!(commands.as_slice(), &[LightCommand::SetEffect(EffectId::None)]);
    }

    #[test]
    fn test_decode_malformed() {
        assert_eq!(decode_command(b"{not json"), Err(ProtocolError::Malformed));
        assert_eq!(
            decode_command(br#"{"brightness":"high"}"#),
            Err(ProtocolError::Malformed)
        );
    }

    #[test]
    fn test_encode_state() {
        let mut buf = [0u8; 128];
        let len = encode_state(&LightState::default(), "None", &mut buf).unwrap();
        assert_eq!(
            core::str::from_utf8(&buf[..len]).unwrap(),
            r#"{"state":"OFF","brightness":100,"color":{"r":255,"g":0,"b":0},"effect":"None","speed":4}"#
        );
    }

    #[test]
    fn test_encode_state_buffer_too_small() {
        let mut buf = [0u8; 8];
        assert_eq!(
            encode_state(&LightState::default(), "None", &mut buf),
            Err(ProtocolError::BufferTooSmall)
        );
    }

    #[test]
    fn test_encode_effect_list() {
        let mut buf = [0u8; 64];
        let len = encode_effect_list(["None", "Fire", "Cylon"], &mut buf).unwrap();
        assert_eq!(&buf[..len], br#"["None","Fire","Cylon"]"#);
    }
}
