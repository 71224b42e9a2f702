mod signature_mapper;
